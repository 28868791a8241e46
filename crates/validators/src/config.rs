use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A regex pattern together with the label reported when it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPattern {
    pub pattern: String,
    pub description: String,
}

impl LabeledPattern {
    fn new(pattern: &str, description: &str) -> Self {
        LabeledPattern {
            pattern: pattern.to_string(),
            description: description.to_string(),
        }
    }
}

/// Static validation configuration: heading synonym tables for both supported
/// languages, token lists and thresholds.
///
/// Every field has a built-in default, so a YAML file only needs the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Heading synonyms used to locate the executive summary.
    pub summary_synonyms: Vec<String>,
    /// Heading synonyms used to locate the bibliography.
    pub bibliography_synonyms: Vec<String>,
    /// Logical section name => literal phrases that identify its heading.
    pub required_sections: IndexMap<String, Vec<String>>,
    /// Literal, case-sensitive placeholder tokens.
    pub placeholders: Vec<String>,
    /// Phrases that mark abandoned content anywhere in the report.
    pub truncation_phrases: Vec<LabeledPattern>,
    /// Placeholders that stand in for omitted bibliography entries.
    pub bibliography_truncation: Vec<LabeledPattern>,
    pub summary_min_words: usize,
    pub summary_max_words: usize,
    pub min_unique_citations: usize,
    pub min_sources: usize,
    pub min_report_words: usize,
    /// Largest citation number for which numbering gaps are enumerated.
    pub max_gap_scan: u64,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        let mut required_sections = IndexMap::new();
        for (name, phrases) in [
            (
                "Executive Summary",
                &["Executive Summary", "สรุปผู้บริหาร", "สรุป"][..],
            ),
            ("Introduction", &["Introduction", "บทนำ"][..]),
            ("Main Analysis", &["Analysis", "การวิเคราะห์", "Finding"][..]),
            ("Synthesis", &["Synthesis", "สังเคราะห์", "ข้อมูลเชิงลึก"][..]),
            ("Limitations", &["Limitation", "ข้อจำกัด", "ข้อควรระวัง"][..]),
            ("Recommendations", &["Recommendation", "ข้อเสนอแนะ"][..]),
            ("Bibliography", &["Bibliography", "บรรณานุกรม", "Sources"][..]),
        ] {
            required_sections.insert(name.to_string(), strings(phrases));
        }

        ValidatorConfig {
            summary_synonyms: strings(&["Executive Summary", "สรุปผู้บริหาร", "สรุป"]),
            bibliography_synonyms: strings(&["Bibliography", "บรรณานุกรม"]),
            required_sections,
            placeholders: strings(&[
                "TBD",
                "TODO",
                "FIXME",
                "XXX",
                "[citation needed]",
                "[needs citation]",
                "[placeholder]",
                "[TODO]",
                "[TBD]",
            ]),
            truncation_phrases: vec![
                LabeledPattern::new("Content continues", "\"Content continues\""),
                LabeledPattern::new("Due to length", "\"Due to length\""),
                LabeledPattern::new("would continue", "\"would continue\""),
                LabeledPattern::new(r"\[Sections \d+-\d+", "\"[Sections X-Y\""),
                LabeledPattern::new("Additional sections", "\"Additional sections\""),
            ],
            bibliography_truncation: vec![
                LabeledPattern::new(r"\[\d+-\d+\]", "Citation range (e.g., [8-75])"),
                LabeledPattern::new(r"Additional.*citations", "\"Additional citations\""),
                LabeledPattern::new(r"\[Continue with", "\"[Continue with\""),
                LabeledPattern::new(r"\[\.\.\.", "\"[...\""),
                // "etc." not followed by a word character
                LabeledPattern::new(r"etc\.(?:\W|$)", "Standalone \"etc.\""),
            ],
            summary_min_words: 50,
            summary_max_words: 250,
            min_unique_citations: 5,
            min_sources: 5,
            min_report_words: 500,
            max_gap_scan: 10_000,
        }
    }
}

impl ValidatorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// A compiled pattern and its label.
#[derive(Debug, Clone)]
pub struct Rule {
    pub regex: Regex,
    pub description: String,
}

/// Configuration with every pattern compiled up front.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub config: ValidatorConfig,
    /// Parallel to `config.required_sections`.
    pub section_detectors: Vec<(String, Regex)>,
    pub truncation: Vec<Rule>,
    pub bibliography_truncation: Vec<Rule>,
}

fn case_insensitive(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ConfigError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn compile_rules(patterns: &[LabeledPattern]) -> Result<Vec<Rule>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            Ok(Rule {
                regex: case_insensitive(&p.pattern)?,
                description: p.description.clone(),
            })
        })
        .collect()
}

impl RuleSet {
    pub fn compile(config: ValidatorConfig) -> Result<Self, ConfigError> {
        let section_detectors = config
            .required_sections
            .iter()
            .map(|(name, phrases)| {
                let alternatives = phrases
                    .iter()
                    .map(|p| regex::escape(p))
                    .collect::<Vec<_>>()
                    .join("|");
                // `##` then the phrase anywhere later on the same line
                let regex = case_insensitive(&format!("##.*(?:{})", alternatives))?;
                Ok((name.clone(), regex))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(RuleSet {
            truncation: compile_rules(&config.truncation_phrases)?,
            bibliography_truncation: compile_rules(&config.bibliography_truncation)?,
            section_detectors,
            config,
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        // The built-in patterns are constants that always compile.
        RuleSet::compile(ValidatorConfig::default())
            .expect("Failed to compile built-in validation rules")
    }
}
