use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::matcher::DocumentCounts;

/// Per-file label counts, keyed by file identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram {
    files: BTreeMap<String, BTreeMap<String, u64>>,
}

impl Histogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` to the (`file`, `label`) cell. Repeated calls accumulate.
    pub fn add(&mut self, file: &str, label: &str, count: u64) {
        let labels = self.files.entry(file.to_owned()).or_default();
        *labels.entry(label.to_owned()).or_insert(0) += count;
    }

    /// Merges one document's counts into the entry for `file`.
    pub fn record(&mut self, file: &str, counts: &DocumentCounts) {
        // Files with no labels still get an entry.
        self.files.entry(file.to_owned()).or_default();
        for (label, count) in counts.iter() {
            self.add(file, label, count);
        }
    }

    #[must_use]
    pub fn get(&self, file: &str, label: &str) -> Option<u64> {
        self.files.get(file).and_then(|labels| labels.get(label)).copied()
    }

    #[must_use]
    pub fn file(&self, file: &str) -> Option<&BTreeMap<String, u64>> {
        self.files.get(file)
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, u64>)> {
        self.files.iter().map(|(f, labels)| (f.as_str(), labels))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Sums every label across all files.
    ///
    /// Labels listed in `order` come first, in that order (0 when no file
    /// has them); labels only found in the histogram follow alphabetically.
    #[must_use]
    pub fn totals(&self, order: &[String]) -> TotalCount {
        let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
        for labels in self.files.values() {
            for (label, count) in labels {
                *sums.entry(label.as_str()).or_insert(0) += count;
            }
        }

        let mut entries: Vec<(String, u64)> = Vec::with_capacity(sums.len().max(order.len()));
        for label in order {
            if entries.iter().any(|(l, _)| l == label) {
                continue;
            }
            let sum = sums.remove(label.as_str()).unwrap_or(0);
            entries.push((label.clone(), sum));
        }
        entries.extend(sums.into_iter().map(|(l, c)| (l.to_owned(), c)));

        TotalCount { entries }
    }
}

/// Label → sum over all files, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalCount {
    entries: Vec<(String, u64)>,
}

impl TotalCount {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Largest single total, 0 when empty.
    #[must_use]
    pub fn max(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }

    #[must_use]
    pub fn sum(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c).sum()
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

impl Serialize for TotalCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}
