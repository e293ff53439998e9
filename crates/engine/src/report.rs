use crate::error::EngineError;
use keyword_histogram_core::{Histogram, TotalCount};
use std::path::{Path, PathBuf};

/// Outcome of one analysis run. Immutable once returned by [`crate::run`].
#[derive(Debug)]
pub struct RunResult {
    pub(crate) histogram: Histogram,
    pub(crate) totals: TotalCount,
    pub(crate) labels: Vec<String>,
    pub(crate) files: Vec<PathBuf>,
    pub(crate) skipped: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub const fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    #[must_use]
    pub const fn totals(&self) -> &TotalCount {
        &self.totals
    }

    /// Configured display labels, in order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Every discovered PDF, including the ones that failed to extract.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Files whose extraction failed under a non-fatal policy.
    #[must_use]
    pub fn skipped(&self) -> &[(PathBuf, EngineError)] {
        &self.skipped
    }

    #[must_use]
    pub fn was_skipped(&self, path: &Path) -> bool {
        self.skipped.iter().any(|(p, _)| p == path)
    }
}
