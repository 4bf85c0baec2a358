pub mod dataset;
pub mod error;
pub mod labels;
pub mod source;

pub use error::CoreError;
pub use labels::{replace_label, LabelMatch, MatchError, ModelLabel, ModelLabelList};
