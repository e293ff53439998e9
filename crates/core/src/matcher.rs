use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::keyword::Keywords;

/// How synonyms are located in a document.
///
/// Word padding only exists for substring matching; regex matching already
/// anchors on word boundaries, so the two cannot be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Case-sensitive literal count. With `as_words`, the synonym is padded
    /// with one space on each side, so text-initial/final words and words
    /// touching punctuation are not counted.
    Substring { as_words: bool },
    /// Case-insensitive whole-word match with optional `-`/`'`/`|` joined
    /// continuations absorbed into the same occurrence.
    Regex,
}

impl Default for MatchMode {
    fn default() -> Self {
        Self::Substring { as_words: false }
    }
}

impl MatchMode {
    /// Regex wins over `as_words`.
    #[must_use]
    pub const fn from_flags(use_regex: bool, as_words: bool) -> Self {
        if use_regex {
            Self::Regex
        } else {
            Self::Substring { as_words }
        }
    }

    #[must_use]
    pub const fn as_words(self) -> bool {
        matches!(self, Self::Substring { as_words: true })
    }
}

#[derive(Debug)]
enum SynonymPattern {
    Literal(String),
    Word(Regex),
}

impl SynonymPattern {
    fn compile(synonym: &str, mode: MatchMode) -> Result<Self> {
        match mode {
            MatchMode::Substring { as_words: false } => Ok(Self::Literal(synonym.to_owned())),
            MatchMode::Substring { as_words: true } => Ok(Self::Literal(format!(" {synonym} "))),
            MatchMode::Regex => {
                // Group 1 catches a word character glued to the keyword; such a
                // hit is not an occurrence.
                let pattern = format!(r"(?im)\b(?:{})(?:[-|']+\w+)*(\w)?", fold_dotted_i(synonym));
                Regex::new(&pattern)
                    .map(Self::Word)
                    .map_err(|source| CoreError::Pattern {
                        keyword: synonym.to_owned(),
                        source,
                    })
            }
        }
    }

    fn count(&self, text: &str) -> u64 {
        match self {
            Self::Literal(needle) => text.matches(needle.as_str()).count() as u64,
            Self::Word(regex) => count_word_matches(regex, text),
        }
    }
}

/// Escapes `synonym` and widens every i-like letter to `[iIİı]`, which the
/// Unicode simple case folding of `(?i)` does not relate.
fn fold_dotted_i(synonym: &str) -> String {
    let mut pattern = String::with_capacity(synonym.len());
    let mut buf = [0u8; 4];
    for c in synonym.chars() {
        if matches!(c, 'i' | 'I' | 'İ' | 'ı') {
            pattern.push_str("[iIİı]");
        } else {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    pattern
}

fn count_word_matches(regex: &Regex, text: &str) -> u64 {
    let mut count = 0;
    let mut pos = 0;
    while pos <= text.len() {
        let Some(caps) = regex.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        if caps.get(1).is_some() {
            let step = text[whole.start()..].chars().next().map_or(1, char::len_utf8);
            pos = whole.start() + step;
            continue;
        }
        count += 1;
        pos = whole.end().max(whole.start() + 1);
    }
    count
}

#[derive(Debug)]
struct CompiledGroup {
    label: String,
    patterns: Vec<SynonymPattern>,
}

/// Label → count for one document, in configured label order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCounts {
    entries: Vec<(String, u64)>,
}

impl DocumentCounts {
    /// Adds `count` to `label`, creating the entry when missing.
    pub fn add(&mut self, label: &str, count: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| l == label) {
            entry.1 += count;
        } else {
            self.entries.push((label.to_owned(), count));
        }
    }

    /// Every label with a zero count.
    #[must_use]
    pub fn zeroed(labels: &[String]) -> Self {
        Self {
            entries: labels.iter().map(|l| (l.clone(), 0)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keyword groups compiled for one [`MatchMode`].
#[derive(Debug)]
pub struct KeywordMatcher {
    mode: MatchMode,
    groups: Vec<CompiledGroup>,
    labels: Vec<String>,
}

impl KeywordMatcher {
    /// # Errors
    ///
    /// Returns [`CoreError::Pattern`] if a regex cannot be built for a synonym.
    pub fn new(keywords: &Keywords, mode: MatchMode) -> Result<Self> {
        let groups = keywords
            .groups()
            .iter()
            .map(|group| {
                let patterns = group
                    .synonyms()
                    .iter()
                    .map(|s| SynonymPattern::compile(s, mode))
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledGroup {
                    label: group.label(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            mode,
            groups,
            labels: keywords.labels(),
        })
    }

    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Counts every group in `text`. Each synonym is counted on its own and
    /// the results are summed into the group label; labels without a hit
    /// are present with 0.
    #[must_use]
    pub fn count(&self, text: &str) -> DocumentCounts {
        let mut counts = DocumentCounts::zeroed(&self.labels);
        for group in &self.groups {
            for pattern in &group.patterns {
                counts.add(&group.label, pattern.count(text));
            }
        }
        counts
    }

    /// Count of a single synonym, as the matcher would compute it.
    ///
    /// # Errors
    ///
    /// Same as [`KeywordMatcher::new`].
    pub fn count_synonym(synonym: &str, mode: MatchMode, text: &str) -> Result<u64> {
        Ok(SynonymPattern::compile(synonym, mode)?.count(text))
    }
}
