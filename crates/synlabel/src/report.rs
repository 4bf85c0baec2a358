//! Plain-text rendering for command output. JSON output goes straight
//! through `serde_json`.

use synlabel_core::dataset::{FolderMapping, MappingOutcome};
use synlabel_core::{LabelMatch, ModelLabel};

pub fn match_line(hit: &LabelMatch) -> String {
    format!("{}\t{}", hit.index, hit.entry)
}

pub fn label_line(label: &ModelLabel) -> String {
    format!("{}\t{}", label.index, label.name)
}

pub fn mapping_line(mapping: &FolderMapping) -> String {
    match &mapping.outcome {
        MappingOutcome::Matched(hit) => format!("{}\t{}\t{}", mapping.folder, hit.index, hit.name),
        MappingOutcome::Unmatched { reason } => {
            format!("{}\t-\tunmatched: {reason}", mapping.folder)
        }
    }
}

pub fn mapping_summary(mappings: &[FolderMapping]) -> String {
    let matched = mappings.iter().filter(|m| m.is_matched()).count();
    format!(
        "{matched} of {} folders matched, {} unmatched",
        mappings.len(),
        mappings.len() - matched
    )
}
