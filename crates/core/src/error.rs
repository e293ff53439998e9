use thiserror::Error;

/// Configuration errors raised before any document is read.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Empty keyword list")]
    EmptyKeywords,

    #[error("Keyword group #{index} has no synonyms")]
    EmptyGroup { index: usize },

    #[error("Keyword group #{index} contains an empty synonym")]
    EmptySynonym { index: usize },

    #[error("Invalid pattern for keyword '{keyword}': {source}")]
    Pattern {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
