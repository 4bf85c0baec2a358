//! Label list entries, match results, and matcher error definitions.

use serde::Serialize;

use crate::error::CoreError;

use super::parse::parse_label_lines;

// ==============================================================================
// Model Label Entries
// ==============================================================================

/// One line of a model class-label list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelLabel {
    /// Class index as written in the entry text.
    pub index: usize,
    /// Label text between the quotes, e.g. `tench, Tinca tinca`.
    pub name: String,
    /// The entry with braces stripped and surrounding whitespace trimmed.
    pub raw: String,
}

/// Ordered, read-only list of model class labels.
///
/// Order follows the source text; matching always scans front to back.
#[derive(Debug, Clone, Default)]
pub struct ModelLabelList {
    pub(super) entries: Vec<ModelLabel>,
}

impl ModelLabelList {
    /// Parse the textual list, one entry per line. Empty lines are skipped.
    pub fn parse(content: &str) -> Result<Self, CoreError> {
        Ok(Self {
            entries: parse_label_lines(content)?,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelLabel> {
        self.entries.iter()
    }

    /// First entry carrying `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ModelLabel> {
        self.entries.iter().find(|entry| entry.index == index)
    }
}

impl FromIterator<ModelLabel> for ModelLabelList {
    fn from_iter<I: IntoIterator<Item = ModelLabel>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ==============================================================================
// Match Results
// ==============================================================================

/// The model entry a dataset label resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelMatch {
    pub index: usize,
    pub name: String,
    pub entry: String,
}

impl From<&ModelLabel> for LabelMatch {
    fn from(label: &ModelLabel) -> Self {
        Self {
            index: label.index,
            name: label.name.clone(),
            entry: label.raw.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("no synset label (`n<digits>-<name>`) found in `{0}`")]
    MissingSynset(String),

    #[error("no model label contains `{needle}` (from `{dataset_label}`)")]
    NoMatch {
        dataset_label: String,
        needle: String,
    },

    #[error("could not build search pattern: {0}")]
    Pattern(#[from] regex::Error),
}
