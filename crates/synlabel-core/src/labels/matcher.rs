//! Dataset-label to model-label matching.
//!
//! The human-readable part of a synset folder label (`n01560419-bulbul` →
//! `bulbul`) is searched for, unanchored, inside each model label in list
//! order. Underscores are treated as spaces on both sides. Matching is
//! substring based, so a short needle can hit a longer unrelated label;
//! [`ModelLabelList::candidates`] exposes every hit for callers that care.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{LabelMatch, MatchError, ModelLabelList};

static SYNSET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"n[0-9]+-([^/]+)").expect("valid synset label regex"));

/// Replace underscores with spaces so `great_grey_owl` and `great grey owl`
/// compare equal.
pub fn normalize_label_text(text: &str) -> String {
    text.replace('_', " ")
}

/// Extract and normalize the text following the synset prefix. Any path
/// component after the folder name is ignored.
pub fn dataset_needle(dataset_label: &str) -> Result<String, MatchError> {
    SYNSET_PATTERN
        .captures(dataset_label)
        .and_then(|caps| caps.get(1))
        .map(|suffix| normalize_label_text(suffix.as_str()))
        .ok_or_else(|| MatchError::MissingSynset(dataset_label.to_string()))
}

/// Map a dataset label onto the first model label that contains it.
pub fn replace_label(
    dataset_label: &str,
    model_labels: &ModelLabelList,
) -> Result<LabelMatch, MatchError> {
    model_labels.find_match(dataset_label)
}

impl ModelLabelList {
    /// First entry, in list order, whose normalized name contains the
    /// normalized dataset suffix.
    pub fn find_match(&self, dataset_label: &str) -> Result<LabelMatch, MatchError> {
        let needle = dataset_needle(dataset_label)?;
        let pattern = needle_pattern(&needle)?;

        self.entries
            .iter()
            .find(|entry| pattern.is_match(&normalize_label_text(&entry.name)))
            .map(LabelMatch::from)
            .ok_or_else(|| MatchError::NoMatch {
                dataset_label: dataset_label.to_string(),
                needle,
            })
    }

    /// Every entry the dataset label would match, in list order. The first
    /// element is what [`ModelLabelList::find_match`] returns.
    pub fn candidates(&self, dataset_label: &str) -> Result<Vec<LabelMatch>, MatchError> {
        let needle = dataset_needle(dataset_label)?;
        let pattern = needle_pattern(&needle)?;

        Ok(self
            .entries
            .iter()
            .filter(|entry| pattern.is_match(&normalize_label_text(&entry.name)))
            .map(LabelMatch::from)
            .collect())
    }
}

// The needle is literal text; folder names like `jack-o'-lantern` or
// `Shih-Tzu` must not be read as regex syntax.
fn needle_pattern(needle: &str) -> Result<Regex, MatchError> {
    Ok(Regex::new(&regex::escape(needle))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(text: &str) -> ModelLabelList {
        ModelLabelList::parse(text).expect("test label list should parse")
    }

    #[test]
    fn bulbul_maps_to_index_zero() {
        let labels = list("{0: 'bulbul'}");
        let matched = replace_label("n01560419-bulbul", &labels).expect("bulbul should match");
        assert_eq!(matched.index, 0);
        assert_eq!(matched.entry, "0: 'bulbul'");
        assert_eq!(matched.name, "bulbul");
    }

    #[test]
    fn missing_label_is_an_explicit_error() {
        let labels = list("{0: 'tench, Tinca tinca',\n1: 'goldfish, Carassius auratus'}");
        let err = replace_label("n01560419-bulbul", &labels).expect_err("bulbul is not listed");
        match err {
            MatchError::NoMatch {
                dataset_label,
                needle,
            } => {
                assert_eq!(dataset_label, "n01560419-bulbul");
                assert_eq!(needle, "bulbul");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn label_without_synset_prefix_is_rejected() {
        let labels = list("{0: 'bulbul'}");
        let err = replace_label("bulbul", &labels).expect_err("no synset prefix");
        assert!(matches!(err, MatchError::MissingSynset(_)));
    }

    #[test]
    fn underscores_normalize_on_both_sides() {
        let spaced = list("{24: 'great grey owl, great gray owl, Strix nebulosa'}");
        let matched = replace_label("n01622779-great_grey_owl", &spaced)
            .expect("dataset underscores should match model spaces");
        assert_eq!(matched.index, 24);

        let underscored = list("{24: 'great_grey_owl'}");
        let matched = replace_label("n01622779-great grey owl", &underscored)
            .expect("model underscores should match dataset spaces");
        assert_eq!(matched.index, 24);
    }

    #[test]
    fn path_suffix_is_ignored() {
        let labels = list("{151: 'Chihuahua',\n152: 'Japanese spaniel'}");
        let matched = replace_label("Images/n02085782-Japanese_spaniel/n02085782_82.jpg", &labels)
            .expect("folder inside a path should match");
        assert_eq!(matched.index, 152);
    }

    #[test]
    fn first_entry_in_list_order_wins() {
        let labels = list("{16: 'bulbul',\n17: 'red-whiskered bulbul'}");
        let matched = replace_label("n01560419-bulbul", &labels).expect("bulbul should match");
        assert_eq!(matched.index, 16);

        let reversed = list("{17: 'red-whiskered bulbul',\n16: 'bulbul'}");
        let matched = replace_label("n01560419-bulbul", &reversed).expect("bulbul should match");
        assert_eq!(matched.index, 17);
    }

    #[test]
    fn candidates_lists_every_substring_hit() {
        let labels = list("{0: 'hound',\n1: 'Afghan hound, Afghan',\n2: 'tabby, tabby cat'}");
        let hits = labels
            .candidates("n02088094-hound")
            .expect("candidates should compute");
        let indices: Vec<_> = hits.iter().map(|hit| hit.index).collect();
        assert_eq!(indices, vec![0, 1]);

        let none = labels
            .candidates("n01560419-bulbul")
            .expect("candidates should compute");
        assert!(none.is_empty());
    }

    #[test]
    fn needle_is_literal_text() {
        let labels = list("{0: 'a.b',\n1: 'axb'}");
        let matched = replace_label("n00000001-a.b", &labels).expect("literal dot should match");
        assert_eq!(matched.index, 0);

        let labels = list("{0: 'axb'}");
        assert!(replace_label("n00000001-a.b", &labels).is_err());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let labels = list("{151: 'Chihuahua'}");
        assert!(replace_label("n02085620-chihuahua", &labels).is_err());
    }
}
