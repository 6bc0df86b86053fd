//! Part-of-speech tagging
//!
//! `LexiconTagger` is a rule-based English tagger: a closed-class lexicon,
//! suffix rules and capitalization cues assign a first category to every
//! token, then a contextual pass resolves participles, gerunds and
//! noun/verb ambiguous words from their neighbours. It is built once per
//! process and shared read-only through [`shared_tagger`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Universal part-of-speech categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Adposition,
    Determiner,
    Pronoun,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Symbol,
    Other,
}

impl PartOfSpeech {
    pub fn is_noun(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::ProperNoun => "PROPN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Adposition => "ADP",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Conjunction => "CCONJ",
            PartOfSpeech::Particle => "PART",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Punctuation => "PUNCT",
            PartOfSpeech::Symbol => "SYM",
            PartOfSpeech::Other => "X",
        };
        write!(f, "{}", tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Splits text into tokens and assigns each one a category.
pub trait PosTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

static SHARED_TAGGER: Lazy<Arc<LexiconTagger>> = Lazy::new(|| Arc::new(LexiconTagger::new()));

/// Process-wide tagger, built on first use.
pub fn shared_tagger() -> Arc<LexiconTagger> {
    Arc::clone(&SHARED_TAGGER)
}

/// First-pass reading of a word before context is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    Fixed(PartOfSpeech),
    /// -ed form: adjective before a noun, verb otherwise
    Participle,
    /// -ing form: noun after a modifier or noun, verb otherwise
    Gerund,
    /// word that is commonly both noun and verb
    NounOrVerb,
    /// -s/-es form of a noun-or-verb word: third person verb or plural noun
    SForm,
    /// "to": particle before a verb, adposition otherwise
    To,
}

#[derive(Debug)]
struct RawToken<'a> {
    text: &'a str,
    sentence_start: bool,
    /// no whitespace between this token and the next one
    joined_to_next: bool,
}

pub struct LexiconTagger {
    lexicon: HashMap<&'static str, PartOfSpeech>,
    ambiguous: HashSet<&'static str>,
    not_gerunds: HashSet<&'static str>,
    not_adverbs: HashSet<&'static str>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let raw = Self::tokenize(text);
        let readings: Vec<Reading> = raw.iter().map(|t| self.read(t)).collect();

        raw.iter()
            .enumerate()
            .map(|(i, token)| {
                let pos = self.resolve(&raw, &readings, i);
                TaggedToken::new(token.text, pos)
            })
            .collect()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();
        let entries: [(&[&'static str], PartOfSpeech); 10] = [
            (DETERMINERS, PartOfSpeech::Determiner),
            (PRONOUNS, PartOfSpeech::Pronoun),
            (ADPOSITIONS, PartOfSpeech::Adposition),
            (CONJUNCTIONS, PartOfSpeech::Conjunction),
            (AUXILIARIES, PartOfSpeech::Auxiliary),
            (PARTICLES, PartOfSpeech::Particle),
            (ADVERBS, PartOfSpeech::Adverb),
            (ADJECTIVES, PartOfSpeech::Adjective),
            (VERBS, PartOfSpeech::Verb),
            (NUMBER_WORDS, PartOfSpeech::Numeral),
        ];
        for (words, pos) in entries {
            for word in words {
                lexicon.entry(*word).or_insert(pos);
            }
        }

        Self {
            lexicon,
            ambiguous: NOUN_OR_VERB.iter().copied().collect(),
            not_gerunds: ING_NOUNS.iter().copied().collect(),
            not_adverbs: LY_NOUNS.iter().copied().collect(),
        }
    }

    /// Whether a lowercase word belongs to a closed word class.
    fn is_closed_class(&self, lower: &str) -> bool {
        matches!(
            self.lexicon.get(lower),
            Some(
                PartOfSpeech::Determiner
                    | PartOfSpeech::Pronoun
                    | PartOfSpeech::Adposition
                    | PartOfSpeech::Conjunction
                    | PartOfSpeech::Auxiliary
                    | PartOfSpeech::Particle
            )
        ) || lower == "to"
    }

    fn tokenize(text: &str) -> Vec<RawToken<'_>> {
        let segments: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
        let mut tokens: Vec<RawToken<'_>> = Vec::new();
        let mut sentence_start = true;
        let mut i = 0;

        while i < segments.len() {
            let (start, segment) = segments[i];

            if segment.chars().all(char::is_whitespace) {
                if segment.contains('\n') {
                    sentence_start = true;
                }
                if let Some(last) = tokens.last_mut() {
                    last.joined_to_next = false;
                }
                i += 1;
                continue;
            }

            let mut end = start + segment.len();
            let mut next = i + 1;

            // ".NET" style tokens
            if segment == "."
                && next < segments.len()
                && segments[next].1.chars().next().map_or(false, char::is_alphabetic)
            {
                let starts_token = tokens.last().map_or(true, |t| !t.joined_to_next);
                if starts_token {
                    end = segments[next].0 + segments[next].1.len();
                    next += 1;
                }
            }

            // "C++" / "C#" style tokens
            if is_word(&text[start..end]) {
                while next < segments.len() && matches!(segments[next].1, "+" | "#") {
                    end = segments[next].0 + segments[next].1.len();
                    next += 1;
                }
            }

            let token_text = &text[start..end];
            tokens.push(RawToken {
                text: token_text,
                sentence_start,
                joined_to_next: true,
            });

            // a bullet at the start of a line keeps the line's first word sentence-initial
            let bullet = sentence_start && matches!(token_text, "-" | "*" | "–" | "—" | "·" | ">");
            sentence_start =
                bullet || matches!(token_text, "." | "!" | "?" | ":" | ";" | "•" | "|");
            i = next;
        }

        if let Some(last) = tokens.last_mut() {
            last.joined_to_next = false;
        }
        tokens
    }

    fn read(&self, token: &RawToken<'_>) -> Reading {
        let text = token.text;

        if !is_word(text) {
            return Reading::Fixed(symbol_class(text));
        }
        if is_numeric(text) {
            return Reading::Fixed(PartOfSpeech::Numeral);
        }

        let lower = text.to_lowercase().replace('’', "'");
        let is_acronym = text.chars().filter(|c| c.is_alphabetic()).count() >= 2
            && text.chars().all(|c| !c.is_lowercase());
        let has_inner_capital = text.chars().skip(1).any(char::is_uppercase)
            && text.chars().any(char::is_lowercase);
        let is_capitalized = text.chars().next().map_or(false, char::is_uppercase);

        if lower == "to" {
            return Reading::To;
        }
        if self.is_closed_class(&lower) && !(is_acronym && ACRONYM_OVERRIDES.contains(&text)) {
            if let Some(pos) = self.lexicon.get(lower.as_str()) {
                return Reading::Fixed(*pos);
            }
        }
        if is_acronym || has_inner_capital || text.contains('+') || text.contains('#') {
            return Reading::Fixed(PartOfSpeech::ProperNoun);
        }
        if is_capitalized && !token.sentence_start {
            return Reading::Fixed(PartOfSpeech::ProperNoun);
        }

        self.read_open_class(&lower)
    }

    fn read_open_class(&self, lower: &str) -> Reading {
        if self.ambiguous.contains(lower) {
            return Reading::NounOrVerb;
        }
        if let Some(pos) = self.lexicon.get(lower) {
            return Reading::Fixed(*pos);
        }
        // "processes" -> "process", "manages" -> "manage"
        for stem in [lower.strip_suffix("es"), lower.strip_suffix('s')].into_iter().flatten() {
            if self.ambiguous.contains(stem) {
                return Reading::SForm;
            }
            if self.lexicon.get(stem) == Some(&PartOfSpeech::Verb) {
                return Reading::Fixed(PartOfSpeech::Verb);
            }
        }

        let len = lower.chars().count();
        if len > 4 && lower.ends_with("ly") && !self.not_adverbs.contains(lower) {
            return Reading::Fixed(PartOfSpeech::Adverb);
        }
        if len > 4 && lower.ends_with("ed") {
            return Reading::Participle;
        }
        if len > 5 && lower.ends_with("ing") && !self.not_gerunds.contains(lower) {
            return Reading::Gerund;
        }
        if len > 5 && (lower.ends_with("ize") || lower.ends_with("ify")) {
            return Reading::Fixed(PartOfSpeech::Verb);
        }
        if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return Reading::Fixed(PartOfSpeech::Adjective);
        }

        Reading::Fixed(PartOfSpeech::Noun)
    }

    fn resolve(&self, tokens: &[RawToken<'_>], readings: &[Reading], i: usize) -> PartOfSpeech {
        match readings[i] {
            Reading::Fixed(pos) => pos,
            Reading::Participle => {
                if self.next_is_nominal(tokens, readings, i) {
                    PartOfSpeech::Adjective
                } else {
                    PartOfSpeech::Verb
                }
            }
            Reading::Gerund => match self.previous(tokens, readings, i) {
                Some(
                    Reading::Fixed(
                        PartOfSpeech::Determiner
                        | PartOfSpeech::Adjective
                        | PartOfSpeech::Noun
                        | PartOfSpeech::ProperNoun,
                    )
                    | Reading::NounOrVerb
                    | Reading::SForm,
                ) => PartOfSpeech::Noun,
                _ => PartOfSpeech::Verb,
            },
            Reading::NounOrVerb => {
                let previous = self.previous(tokens, readings, i);
                let verbal_context = match previous {
                    Some(Reading::Fixed(PartOfSpeech::Auxiliary)) | Some(Reading::To) => true,
                    Some(Reading::Fixed(PartOfSpeech::Pronoun)) => {
                        SUBJECT_PRONOUNS.contains(&tokens[i - 1].text.to_lowercase().as_str())
                    }
                    None => matches!(
                        readings.get(i + 1),
                        Some(Reading::Fixed(PartOfSpeech::Determiner | PartOfSpeech::Pronoun))
                    ),
                    _ => false,
                };
                if verbal_context {
                    PartOfSpeech::Verb
                } else {
                    PartOfSpeech::Noun
                }
            }
            Reading::SForm => {
                let previous = self.previous(tokens, readings, i);
                let after_subject = previous.is_some()
                    && SUBJECT_PRONOUNS.contains(&tokens[i - 1].text.to_lowercase().as_str());
                if after_subject {
                    return PartOfSpeech::Verb;
                }
                let next = self.next(tokens, readings, i);
                let takes_object = match previous {
                    // "the changes", "automated tests", "with reports"
                    Some(Reading::Fixed(
                        PartOfSpeech::Determiner
                        | PartOfSpeech::Adjective
                        | PartOfSpeech::Numeral
                        | PartOfSpeech::Adposition
                        | PartOfSpeech::Auxiliary
                        | PartOfSpeech::Pronoun,
                    ))
                    | Some(Reading::Participle | Reading::Gerund | Reading::To) => false,
                    // "unit tests", but "Jane manages the team"
                    Some(Reading::Fixed(PartOfSpeech::Noun | PartOfSpeech::ProperNoun))
                    | Some(Reading::NounOrVerb | Reading::SForm) => matches!(
                        next,
                        Some(Reading::Fixed(
                            PartOfSpeech::Determiner
                                | PartOfSpeech::Pronoun
                                | PartOfSpeech::ProperNoun
                                | PartOfSpeech::Numeral
                        ))
                    ),
                    None => matches!(
                        next,
                        Some(Reading::Fixed(
                            PartOfSpeech::Determiner
                                | PartOfSpeech::Pronoun
                                | PartOfSpeech::ProperNoun
                                | PartOfSpeech::Numeral
                                | PartOfSpeech::Adjective
                        ))
                    ),
                    // after "and", an adverb or punctuation
                    _ => matches!(
                        next,
                        Some(
                            Reading::Fixed(
                                PartOfSpeech::Determiner
                                    | PartOfSpeech::Pronoun
                                    | PartOfSpeech::ProperNoun
                                    | PartOfSpeech::Numeral
                                    | PartOfSpeech::Adjective
                                    | PartOfSpeech::Noun
                            ) | Reading::NounOrVerb
                                | Reading::SForm
                                | Reading::Gerund
                        )
                    ),
                };
                if takes_object {
                    PartOfSpeech::Verb
                } else {
                    PartOfSpeech::Noun
                }
            }
            Reading::To => match readings.get(i + 1) {
                Some(Reading::NounOrVerb) | Some(Reading::Fixed(PartOfSpeech::Verb)) => {
                    PartOfSpeech::Particle
                }
                _ => PartOfSpeech::Adposition,
            },
        }
    }

    /// Reading of the previous token within the same sentence.
    fn previous(&self, tokens: &[RawToken<'_>], readings: &[Reading], i: usize) -> Option<Reading> {
        if i == 0 || tokens[i].sentence_start {
            return None;
        }
        Some(readings[i - 1])
    }

    /// Reading of the next token within the same sentence.
    fn next(&self, tokens: &[RawToken<'_>], readings: &[Reading], i: usize) -> Option<Reading> {
        match tokens.get(i + 1) {
            Some(next) if !next.sentence_start => Some(readings[i + 1]),
            _ => None,
        }
    }

    fn next_is_nominal(&self, tokens: &[RawToken<'_>], readings: &[Reading], i: usize) -> bool {
        match (tokens.get(i + 1), readings.get(i + 1)) {
            (Some(next), Some(reading)) if !next.sentence_start => matches!(
                reading,
                Reading::Fixed(
                    PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Adjective
                ) | Reading::NounOrVerb
                    | Reading::SForm
                    | Reading::Gerund
                    | Reading::Participle
            ),
            _ => false,
        }
    }
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

/// "2024", "3.5", "10,000", "5G", "1st"
fn is_numeric(text: &str) -> bool {
    text.chars().next().map_or(false, |c| c.is_ascii_digit())
}

fn symbol_class(segment: &str) -> PartOfSpeech {
    if segment
        .chars()
        .all(|c| matches!(c, '$' | '%' | '+' | '=' | '<' | '>' | '|' | '~' | '^' | '©' | '®' | '™' | '€' | '£' | '&' | '#' | '@'))
    {
        if segment == "&" {
            PartOfSpeech::Conjunction
        } else {
            PartOfSpeech::Symbol
        }
    } else if segment.chars().all(|c| c.is_ascii_punctuation() || is_unicode_punctuation(c)) {
        PartOfSpeech::Punctuation
    } else {
        PartOfSpeech::Other
    }
}

fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '‘' | '’' | '“' | '”' | '–' | '—' | '…' | '•' | '·' | '«' | '»' | '¿' | '¡'
    )
}

/// All-caps spellings that are acronyms rather than function words.
const ACRONYM_OVERRIDES: &[&str] = &["IT", "US", "OR"];

const SUBJECT_PRONOUNS: &[&str] =
    &["i", "you", "we", "they", "he", "she", "it", "who", "which", "that"];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less"];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "many", "much", "few", "several",
    "more", "most", "less", "least", "other", "whatever", "whichever",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "who",
    "whom", "whose", "which", "what", "something", "anything", "everything", "nothing",
    "someone", "anyone", "everyone", "somebody", "anybody", "everybody", "nobody", "i'm",
    "you're", "we're", "they're", "it's", "i've", "we've", "you've", "they've", "i'll",
    "we'll", "you'll", "i'd", "we'd",
];

const ADPOSITIONS: &[&str] = &[
    "with", "in", "on", "at", "by", "for", "from", "of", "into", "onto", "about", "across",
    "after", "against", "along", "among", "around", "as", "before", "behind", "below",
    "beneath", "beside", "between", "beyond", "during", "except", "inside", "near", "off",
    "outside", "over", "per", "since", "through", "throughout", "toward", "towards", "under",
    "until", "upon", "via", "within", "without", "like", "including", "regarding",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "though",
    "whereas", "unless", "whether", "than", "plus",
];

const AUXILIARIES: &[&str] = &[
    "be", "is", "am", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "cannot", "don't", "doesn't", "didn't", "can't", "won't", "wouldn't",
    "shouldn't", "couldn't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't",
    "hadn't",
];

const PARTICLES: &[&str] = &["not", "n't", "'s", "up", "out"];

const ADVERBS: &[&str] = &[
    "very", "also", "too", "well", "often", "always", "never", "sometimes", "usually", "just",
    "only", "even", "still", "already", "now", "then", "here", "there", "when", "where", "why",
    "how", "however", "therefore", "again", "ever", "almost", "quite", "rather", "together",
    "soon", "abroad", "currently", "previously", "etc",
];

const ADJECTIVES: &[&str] = &[
    "new", "good", "great", "strong", "excellent", "senior", "junior", "large", "small", "big",
    "high", "low", "key", "main", "best", "better", "able", "solid", "deep", "broad", "fast",
    "full", "remote", "hybrid", "various", "relevant", "independent", "same", "different",
    "proficient", "familiar", "hands-on", "modern", "complex", "scalable", "robust", "agile",
    "technical", "professional", "excellent", "effective", "efficient", "fluent", "nice",
    "plus", "real", "own", "bad", "early", "late", "long", "short", "top", "open", "clear",
    "current", "previous", "recent", "multiple", "cross-functional", "highly", "advanced",
    "basic", "minimum", "maximum", "ideal", "successful", "analytical", "critical",
];

const VERBS: &[&str] = &[
    "develop", "build", "built", "create", "deliver", "implement", "maintain", "ensure",
    "collaborate", "write", "wrote", "written", "make", "made", "take", "took", "taken", "get",
    "got", "give", "gave", "given", "know", "knew", "known", "want", "seek", "join", "apply",
    "include", "provide", "improve", "deploy", "analyze", "analyse", "led", "become", "became",
    "grow", "grew", "drive", "drove", "driven", "define", "identify", "architect", "own",
    "communicate", "coordinate", "contribute", "participate", "work", "thrive", "enjoy",
    "understand", "understood", "learn", "learnt", "translate", "partner", "execute",
    "achieve", "reduce", "increase", "enable", "empower", "mentor", "transform", "streamline",
    "automate", "launch", "migrate", "integrate", "establish", "oversee", "oversaw", "ran",
    "run", "see", "saw", "seen", "go", "went", "gone", "say", "said", "think", "thought",
    "find", "found", "keep", "kept", "bring", "brought", "begin", "began", "begun", "show",
    "showed", "shown", "feel", "felt", "leave", "left", "put", "mean", "meant", "let",
];

/// Words read as nouns unless their neighbours say otherwise.
const NOUN_OR_VERB: &[&str] = &[
    "design", "work", "support", "use", "need", "test", "lead", "help", "code", "report",
    "plan", "process", "program", "review", "release", "change", "contact", "access", "offer",
    "focus", "result", "manage", "mentor", "deploy", "drive", "build", "run", "document",
    "model", "debug", "research", "train", "experience", "project", "own", "partner",
    "architect", "deliver", "develop", "implement", "create", "maintain", "write", "learn",
    "increase", "reduce", "launch", "improve", "analyze", "automate", "join", "apply",
];

/// -ing words that are plain nouns.
const ING_NOUNS: &[&str] = &[
    "string", "spring", "morning", "evening", "ceiling", "wedding", "thing", "things",
    "something", "anything", "everything", "nothing", "during", "including", "king", "ring",
    "wing", "offering", "offerings", "clothing", "pudding", "sibling", "siblings",
];

/// -ly words that are plain nouns.
const LY_NOUNS: &[&str] = &[
    "family", "supply", "assembly", "reply", "apply", "anomaly", "monopoly", "ally", "rally",
    "italy", "july", "butterfly", "jelly", "belly",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion",
];
