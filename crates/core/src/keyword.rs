use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Separator placed between synonyms in a display label.
pub const LABEL_SEPARATOR: &str = "/";

/// Synonyms that are counted together under one display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GroupRepr", into = "Vec<String>")]
pub struct KeywordGroup {
    synonyms: Vec<String>,
}

/// A keywords file may list a bare string where a one-synonym group is meant.
#[derive(Deserialize)]
#[serde(untagged)]
enum GroupRepr {
    Single(String),
    Many(Vec<String>),
}

impl From<GroupRepr> for KeywordGroup {
    fn from(repr: GroupRepr) -> Self {
        match repr {
            GroupRepr::Single(s) => Self::single(s),
            GroupRepr::Many(v) => Self::new(v),
        }
    }
}

impl From<KeywordGroup> for Vec<String> {
    fn from(group: KeywordGroup) -> Self {
        group.synonyms
    }
}

impl KeywordGroup {
    pub fn new<I, S>(synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(keyword: impl Into<String>) -> Self {
        Self {
            synonyms: vec![keyword.into()],
        }
    }

    #[must_use]
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    /// Synonyms joined with `/`, surrounding whitespace trimmed.
    #[must_use]
    pub fn label(&self) -> String {
        self.synonyms.join(LABEL_SEPARATOR).trim().to_owned()
    }
}

/// Validated, non-empty, ordered list of keyword groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<KeywordGroup>", into = "Vec<KeywordGroup>")]
pub struct Keywords {
    groups: Vec<KeywordGroup>,
}

impl Keywords {
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyKeywords`] for an empty list, and
    /// [`CoreError::EmptyGroup`] / [`CoreError::EmptySynonym`] when a group
    /// has nothing to search for.
    pub fn new(groups: Vec<KeywordGroup>) -> Result<Self> {
        if groups.is_empty() {
            return Err(CoreError::EmptyKeywords);
        }
        for (index, group) in groups.iter().enumerate() {
            if group.synonyms.is_empty() {
                return Err(CoreError::EmptyGroup { index });
            }
            if group.synonyms.iter().any(String::is_empty) {
                return Err(CoreError::EmptySynonym { index });
            }
        }
        Ok(Self { groups })
    }

    #[must_use]
    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Display labels in configured order, duplicates removed.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::with_capacity(self.groups.len());
        for label in self.groups.iter().map(KeywordGroup::label) {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl TryFrom<Vec<KeywordGroup>> for Keywords {
    type Error = CoreError;

    fn try_from(groups: Vec<KeywordGroup>) -> Result<Self> {
        Self::new(groups)
    }
}

impl From<Keywords> for Vec<KeywordGroup> {
    fn from(keywords: Keywords) -> Self {
        keywords.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_synonyms_with_slash() {
        let group = KeywordGroup::new(["Big Data", "Data Analytics"]);
        assert_eq!(group.label(), "Big Data/Data Analytics");
    }

    #[test]
    fn label_trims_outer_whitespace_only() {
        let group = KeywordGroup::new([" AI", "Machine Learning "]);
        assert_eq!(group.label(), "AI/Machine Learning");
    }

    #[test]
    fn empty_keyword_list_is_rejected() {
        assert!(matches!(Keywords::new(vec![]), Err(CoreError::EmptyKeywords)));
    }

    #[test]
    fn empty_group_and_synonym_are_rejected() {
        let err = Keywords::new(vec![KeywordGroup::single("AI"), KeywordGroup::new(Vec::<String>::new())]);
        assert!(matches!(err, Err(CoreError::EmptyGroup { index: 1 })));

        let err = Keywords::new(vec![KeywordGroup::new(["AI", ""])]);
        assert!(matches!(err, Err(CoreError::EmptySynonym { index: 0 })));
    }

    #[test]
    fn labels_keep_order_and_drop_duplicates() {
        let keywords = Keywords::new(vec![
            KeywordGroup::single("Robotic"),
            KeywordGroup::new(["Artificial Intelligence", "AI"]),
            KeywordGroup::single("Robotic"),
        ])
        .unwrap();
        assert_eq!(keywords.labels(), vec!["Robotic", "Artificial Intelligence/AI"]);
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn deserializes_mixed_strings_and_lists() {
        let keywords: Keywords =
            serde_json::from_str(r#"[["Artificial Intelligence", "AI"], "Big Data"]"#).unwrap();
        assert_eq!(keywords.groups()[0].synonyms(), ["Artificial Intelligence", "AI"]);
        assert_eq!(keywords.groups()[1], KeywordGroup::single("Big Data"));
    }

    #[test]
    fn deserializing_empty_list_fails() {
        let result: std::result::Result<Keywords, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
