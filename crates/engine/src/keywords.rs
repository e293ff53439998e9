//! Keyword lists loaded from disk.
//!
//! Supported layouts, picked by file extension:
//!
//! - `.json`: `[["Artificial Intelligence", "AI"], "Big Data"]`
//! - `.yaml` / `.yml` (feature `yaml`): the same structure in YAML
//! - anything else: one group per line, synonyms separated by `|`,
//!   blank lines and `#` comments ignored

use crate::error::{EngineError, Result};
use keyword_histogram_core::{KeywordGroup, Keywords};
use std::path::Path;

/// Separator between synonyms in plain-text lists and on the command line.
pub const SYNONYM_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeywordsFormat {
    Json,
    Yaml,
    Lines,
}

impl KeywordsFormat {
    fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Lines,
        }
    }
}

/// Splits `"A|B"` into a group of trimmed synonyms.
#[must_use]
pub fn parse_group(spec: &str) -> KeywordGroup {
    KeywordGroup::new(spec.split(SYNONYM_SEPARATOR).map(str::trim))
}

/// Reads and validates a keyword list.
///
/// # Errors
///
/// Returns [`EngineError::KeywordsFile`] if the file cannot be read, cannot
/// be parsed or yields no usable keyword group.
pub fn load_keywords(path: &Path) -> Result<Keywords> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::KeywordsFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_keywords(&content, KeywordsFormat::for_path(path)).map_err(|message| EngineError::KeywordsFile {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_keywords(content: &str, format: KeywordsFormat) -> std::result::Result<Keywords, String> {
    match format {
        KeywordsFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        KeywordsFormat::Yaml => parse_yaml(content),
        KeywordsFormat::Lines => {
            let groups = content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(parse_group)
                .collect();
            Keywords::new(groups).map_err(|e| e.to_string())
        }
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(content: &str) -> std::result::Result<Keywords, String> {
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_content: &str) -> std::result::Result<Keywords, String> {
    Err("YAML keyword files require the `yaml` feature".into())
}
