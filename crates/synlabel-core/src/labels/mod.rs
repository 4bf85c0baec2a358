//! Model class-label lists and synset folder matching.
//!
//! Parses the `{idx: 'label', ...}` text dump that ships with pretrained
//! ImageNet classifiers into an ordered [`ModelLabelList`], and maps
//! dataset folder labels such as `n01560419-bulbul` onto its entries.

mod matcher;
mod parse;
mod types;

pub use matcher::{dataset_needle, normalize_label_text, replace_label};
pub use types::{LabelMatch, MatchError, ModelLabel, ModelLabelList};
