//! Dataset directory mapping: resolves every synset class folder of an
//! ImageNet-style dataset (e.g. Stanford Dogs `Images/`) to a model label.

use std::path::Path;

use serde::Serialize;

use crate::error::CoreError;
use crate::labels::{dataset_needle, LabelMatch, ModelLabelList};

/// Outcome of mapping one dataset folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MappingOutcome {
    Matched(LabelMatch),
    Unmatched { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderMapping {
    pub folder: String,
    pub outcome: MappingOutcome,
}

impl FolderMapping {
    pub fn is_matched(&self) -> bool {
        matches!(self.outcome, MappingOutcome::Matched(_))
    }
}

/// Names of the immediate subdirectories of `root` that carry a synset
/// label, sorted for deterministic output across filesystems.
pub fn synset_dirs(root: &Path) -> Result<Vec<String>, CoreError> {
    if !root.is_dir() {
        return Err(CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("dataset directory not found: {}", root.display()),
        )));
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if dataset_needle(&name).is_ok() {
            names.push(name);
        } else {
            tracing::debug!(folder = %name, "skipping folder without synset label");
        }
    }
    names.sort();
    Ok(names)
}

/// Map every synset folder under `root` onto `labels`. Folders that do not
/// resolve are reported, not dropped.
pub fn map_dataset_dir(
    root: &Path,
    labels: &ModelLabelList,
) -> Result<Vec<FolderMapping>, CoreError> {
    let folders = synset_dirs(root)?;
    Ok(folders
        .into_iter()
        .map(|folder| map_folder(folder, labels))
        .collect())
}

fn map_folder(folder: String, labels: &ModelLabelList) -> FolderMapping {
    let outcome = match labels.candidates(&folder) {
        Ok(candidates) if candidates.is_empty() => {
            tracing::warn!(folder = %folder, "no model label matches folder");
            MappingOutcome::Unmatched {
                reason: format!("no model label contains the name in `{folder}`"),
            }
        }
        Ok(mut candidates) => {
            if candidates.len() > 1 {
                tracing::warn!(
                    folder = %folder,
                    candidates = candidates.len(),
                    chosen = candidates[0].index,
                    "folder name matches several model labels; using the first"
                );
            }
            MappingOutcome::Matched(candidates.swap_remove(0))
        }
        Err(e) => MappingOutcome::Unmatched {
            reason: e.to_string(),
        },
    };
    FolderMapping { folder, outcome }
}
