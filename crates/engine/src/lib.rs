// crates/engine/src/lib.rs
use log::{info, warn};
use std::path::{Path, PathBuf};

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod filesystem;
pub mod keywords;
pub mod processor;
pub mod report;

use crate::config::{AnalysisConfig, ExtractionPolicy};
use crate::error::{EngineError, Result};
use crate::extract::{PdfTextExtractor, TextExtractor};
use crate::processor::{file_id, process_file};
use crate::report::RunResult;
use keyword_histogram_core::{DocumentCounts, Histogram, KeywordMatcher};

/// Run the analysis with the `pdf-extract` backend.
///
/// # Errors
///
/// See [`run_with`].
pub fn run(config: &AnalysisConfig) -> Result<RunResult> {
    run_with(config, &PdfTextExtractor)
}

/// Run the analysis: compile keywords, discover PDFs, extract and count each
/// one, then derive the totals.
///
/// # Errors
///
/// Configuration errors are reported before the file system is touched.
/// Discovery errors (no PDFs, missing root) stop the run before matching.
/// Extraction errors stop the run only under [`ExtractionPolicy::Fail`];
/// otherwise they are collected in [`RunResult::skipped`].
pub fn run_with<E>(config: &AnalysisConfig, extractor: &E) -> Result<RunResult>
where
    E: TextExtractor + ?Sized,
{
    let matcher = KeywordMatcher::new(&config.keywords, config.mode)?;
    let files = filesystem::discover_pdfs(&config.root, &config.walk)?;
    info!("analyzing {} PDF files under {}", files.len(), config.root.display());

    let mut merge = Merge::new(config.on_extract_error, matcher.labels());
    if config.jobs > 1 {
        for (path, outcome) in files.iter().zip(process_parallel(&files, extractor, &matcher, config.jobs)?) {
            merge.push(path, outcome)?;
        }
    } else {
        for path in &files {
            merge.push(path, process_file(path, extractor, &matcher))?;
        }
    }

    let Merge {
        histogram, skipped, ..
    } = merge;
    let totals = histogram.totals(matcher.labels());
    info!(
        "counted {} occurrences in {} files ({} skipped)",
        totals.sum(),
        histogram.len(),
        skipped.len()
    );

    Ok(RunResult {
        histogram,
        totals,
        labels: matcher.labels().to_vec(),
        files,
        skipped,
    })
}

/// Serial merge of per-file outcomes into the histogram.
struct Merge<'a> {
    policy: ExtractionPolicy,
    labels: &'a [String],
    histogram: Histogram,
    skipped: Vec<(PathBuf, EngineError)>,
}

impl<'a> Merge<'a> {
    fn new(policy: ExtractionPolicy, labels: &'a [String]) -> Self {
        Self {
            policy,
            labels,
            histogram: Histogram::new(),
            skipped: Vec::new(),
        }
    }

    fn push(&mut self, path: &Path, outcome: Result<DocumentCounts>) -> Result<()> {
        let id = file_id(path);
        match (outcome, self.policy) {
            (Ok(counts), _) => self.histogram.record(&id, &counts),
            (Err(e), ExtractionPolicy::Fail) => return Err(e),
            (Err(e), ExtractionPolicy::Skip) => {
                warn!("skipping {}: {e}", path.display());
                self.skipped.push((path.to_path_buf(), e));
            }
            (Err(e), ExtractionPolicy::Zero) => {
                warn!("recording zero counts for {}: {e}", path.display());
                self.histogram.record(&id, &DocumentCounts::zeroed(self.labels));
                self.skipped.push((path.to_path_buf(), e));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "parallel")]
fn process_parallel<E>(
    files: &[PathBuf],
    extractor: &E,
    matcher: &KeywordMatcher,
    jobs: usize,
) -> Result<Vec<Result<DocumentCounts>>>
where
    E: TextExtractor + ?Sized,
{
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| EngineError::Config(format!("cannot start {jobs} workers: {e}")))?;

    Ok(pool.install(|| {
        files
            .par_iter()
            .map(|path| process_file(path, extractor, matcher))
            .collect()
    }))
}

#[cfg(not(feature = "parallel"))]
fn process_parallel<E>(
    files: &[PathBuf],
    extractor: &E,
    matcher: &KeywordMatcher,
    jobs: usize,
) -> Result<Vec<Result<DocumentCounts>>>
where
    E: TextExtractor + ?Sized,
{
    warn!("built without the `parallel` feature; ignoring jobs={jobs}");
    Ok(files.iter().map(|path| process_file(path, extractor, matcher)).collect())
}
