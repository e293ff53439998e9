use crate::error::Result;
use crate::extract::TextExtractor;
use keyword_histogram_core::{DocumentCounts, KeywordMatcher};
use log::debug;
use std::path::Path;

/// Identifier used as the histogram key for `path`.
#[must_use]
pub fn file_id(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Extract one document and count every keyword group in it.
///
/// # Errors
///
/// Propagates the extractor's error unchanged.
pub fn process_file<E>(path: &Path, extractor: &E, matcher: &KeywordMatcher) -> Result<DocumentCounts>
where
    E: TextExtractor + ?Sized,
{
    let text = extractor.extract(path)?;
    let counts = matcher.count(&text);
    debug!(
        "{}: {} chars, {} hits",
        path.display(),
        text.chars().count(),
        counts.iter().map(|(_, c)| c).sum::<u64>()
    );
    Ok(counts)
}
