use derive_builder::Builder;
use keyword_histogram_core::{KeywordGroup, Keywords, MatchMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

/// What to do when a discovered PDF cannot be turned into text.
///
/// The chosen policy applies to every file of the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionPolicy {
    /// Abort the run on the first failure.
    #[default]
    Fail,
    /// Leave the file out of the histogram and report it.
    Skip,
    /// Record the file with every label at 0 and report it.
    Zero,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    /// Descend into hidden files and directories.
    #[builder(default = "true")]
    pub hidden: bool,
    #[builder(default)]
    pub git_ignore: bool,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            hidden: true,
            git_ignore: false,
            follow_links: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct AnalysisConfig {
    pub root: PathBuf,
    pub keywords: Keywords,
    #[builder(default)]
    pub mode: MatchMode,
    #[builder(default)]
    pub walk: WalkOptions,
    /// Worker threads for extraction and matching. 1 keeps the run sequential.
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default)]
    pub on_extract_error: ExtractionPolicy,
}

impl AnalysisConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.jobs == Some(0) {
            return Err("jobs must be at least 1".into());
        }
        Ok(())
    }
}

impl AnalysisConfig {
    /// Builds a configuration with default walk and extraction settings.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when `groups` is empty or a group has
    /// no usable synonym.
    pub fn new(root: impl Into<PathBuf>, groups: Vec<KeywordGroup>, mode: MatchMode) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            keywords: Keywords::new(groups)?,
            mode,
            walk: WalkOptions::default(),
            jobs: 1,
            on_extract_error: ExtractionPolicy::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn new_rejects_empty_keywords() {
        let err = AnalysisConfig::new(".", vec![], MatchMode::default()).unwrap_err();
        assert!(matches!(err, EngineError::Keywords(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn builder_applies_defaults() {
        let keywords = Keywords::new(vec![KeywordGroup::single("AI")]).unwrap();
        let config = AnalysisConfigBuilder::default()
            .root("docs")
            .keywords(keywords)
            .build()
            .unwrap();

        assert_eq!(config.jobs, 1);
        assert_eq!(config.mode, MatchMode::Substring { as_words: false });
        assert_eq!(config.on_extract_error, ExtractionPolicy::Fail);
        assert!(config.walk.hidden);
        assert!(!config.walk.git_ignore);
    }

    #[test]
    fn builder_rejects_zero_jobs() {
        let keywords = Keywords::new(vec![KeywordGroup::single("AI")]).unwrap();
        let result = AnalysisConfigBuilder::default()
            .root("docs")
            .keywords(keywords)
            .jobs(0usize)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_requires_keywords() {
        let result = AnalysisConfigBuilder::default().root("docs").build();
        assert!(result.is_err());
    }
}
