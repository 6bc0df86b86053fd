//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub enable_caching: bool,
    /// Characters shown per document by `analyze --preview`
    pub preview_chars: usize,
}

/// Tokenization options for the similarity scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub lowercase: bool,
    pub min_token_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub report_file_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Text,
    Markdown,
    Json,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            enable_caching: true,
            preview_chars: 300,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            lowercase: false,
            min_token_chars: 1,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            report_file_name: "resume_analysis_report.txt".to_string(),
        }
    }
}

impl Config {
    /// Load a config file, writing defaults there on first run.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.scoring.min_token_chars == 0 {
            return Err(ResumeAnalyzerError::Configuration(
                "scoring.min_token_chars must be at least 1".to_string(),
            ));
        }
        if self.output.report_file_name.trim().is_empty() {
            return Err(ResumeAnalyzerError::Configuration(
                "output.report_file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nlowercase = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert!(config.scoring.lowercase);
        assert_eq!(config.scoring.min_token_chars, 1);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_zero_token_length_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nmin_token_chars = 0\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ResumeAnalyzerError::Configuration(_))));
    }

    #[test]
    fn test_roundtrip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.output.format, OutputFormat::Markdown);
    }
}
