//! Resume analyzer: keyword gap and similarity report for a resume and a job description

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::input::{DocumentSource, InputManager};
use resume_analyzer::output::formatter::{save_report_to_file, suggest_filename};
use resume_analyzer::output::{ReportDocument, ReportGenerator};
use resume_analyzer::{AnalysisEngine, Config, Result, ResumeAnalyzerError};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        // 2: the inputs were rejected, 1: anything else went wrong
        process::exit(if e.is_input_error() { 2 } else { 1 });
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            preview,
        } => run_analyze(resume, job, job_text, output, save, preview, &config).await,

        Commands::Keywords { file, tags } => {
            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
            let text = input_manager.extract_text(&file).await?;

            let engine = AnalysisEngine::from_config(&config);
            let tagged = engine.extractor().extract_tagged(&text);
            info!("{} keywords in {}", tagged.len(), file.display());

            if tags {
                for token in &tagged {
                    println!("{}\t{}", token.text, token.pos);
                }
            } else {
                let terms = engine.extractor().extract_terms(&text);
                println!("{}", terms.into_iter().collect::<Vec<_>>().join(", "));
            }
            Ok(())
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("# {}\n{}", config_path.display(), content);
                }
                Some(ConfigAction::Reset) => {
                    Config::default().save_to(config_path)?;
                    println!("Configuration reset to defaults: {}", config_path.display());
                }
                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }
            }
            Ok(())
        }
    }
}

async fn run_analyze(
    resume: PathBuf,
    job: Option<PathBuf>,
    job_text: Option<String>,
    output: Option<String>,
    save: Option<Option<PathBuf>>,
    preview: bool,
    config: &Config,
) -> Result<()> {
    let format = match output {
        Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyzerError::InvalidInput)?,
        None => config.output.format,
    };

    let resume_source = DocumentSource::File(resume);
    let job_source = match (job, job_text) {
        (Some(path), _) => DocumentSource::File(path),
        (None, Some(text)) => DocumentSource::Pasted(text),
        (None, None) => {
            return Err(ResumeAnalyzerError::InvalidInput(
                "Please provide a job description file or text".to_string(),
            ))
        }
    };

    let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
    let request = input_manager.load_request(&resume_source, &job_source).await?;

    if preview {
        let preview_chars = config.input.preview_chars;
        let resume_text = request.candidate_text.as_deref().unwrap_or_default();
        let job_text = request.target_text.as_deref().unwrap_or_default();
        println!("Resume Text Preview:\n{}\n", cli::truncate_text(resume_text, preview_chars));
        println!("Job Description Preview:\n{}\n", cli::truncate_text(job_text, preview_chars));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .map_err(|e| ResumeAnalyzerError::OutputFormatting(e.to_string()))?,
    );
    spinner.set_message("Analyzing your resume...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let engine = AnalysisEngine::from_config(config);
    let analysis = engine.analyze_request(&request);
    spinner.finish_and_clear();

    let report = ReportDocument::new(analysis?, resume_source.describe(), job_source.describe());
    let generator = ReportGenerator::with_options(config.output.color_output, true, true);
    println!("{}", generator.generate_report(&report, format)?);

    if let Some(save) = save {
        let path = save.unwrap_or_else(|| {
            PathBuf::from(suggest_filename(format, &config.output.report_file_name))
        });
        let content = generator.generate_file_report(&report, format)?;
        save_report_to_file(&content, &path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
