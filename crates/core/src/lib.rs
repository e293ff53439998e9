//! # keyword_histogram_core
//!
//! Pure counting logic for `keyword_histogram`:
//!
//! - [`keyword`]: keyword groups (synonyms counted under one label)
//! - [`matcher`]: substring and word-boundary matching
//! - [`histogram`]: per-file accumulation and per-label totals
//!
//! Nothing in this crate touches the file system.

#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod histogram;
pub mod keyword;
pub mod matcher;

pub use error::{CoreError, Result};
pub use histogram::{Histogram, TotalCount};
pub use keyword::{KeywordGroup, Keywords};
pub use matcher::{DocumentCounts, KeywordMatcher, MatchMode};
