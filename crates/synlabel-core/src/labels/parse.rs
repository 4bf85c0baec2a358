//! Parsing for the `{idx: 'label', ...}` class-label dump.
//!
//! Each non-empty line holds one entry. The first line opens the dict with
//! `{` and the last closes it with `}` (and has no trailing comma), so both
//! braces are stripped before the entry pattern is applied.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

use super::types::ModelLabel;

static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([0-9]+)\s*:\s*(?:'(.*)'|"(.*)")\s*,?$"#).expect("valid label entry regex")
});

/// Parse label-list text into entries, preserving source order.
/// Duplicate indices are accepted but logged as warnings.
pub(super) fn parse_label_lines(content: &str) -> Result<Vec<ModelLabel>, CoreError> {
    let mut seen = HashSet::new();
    content
        .lines()
        .enumerate()
        .try_fold(Vec::new(), |mut entries, (line_num, line)| {
            let raw = strip_braces(line);
            if raw.is_empty() {
                return Ok(entries);
            }

            let entry = parse_entry(&raw).ok_or_else(|| CoreError::LabelParse {
                line: line_num + 1,
                message: format!("expected `<index>: '<label>'`, found `{raw}`"),
            })?;
            if !seen.insert(entry.index) {
                tracing::warn!(
                    line = line_num + 1,
                    index = entry.index,
                    "duplicate class index; earlier entry takes precedence when matching"
                );
            }
            entries.push(entry);
            Ok(entries)
        })
}

fn strip_braces(line: &str) -> String {
    line.replace(['{', '}'], "").trim().to_string()
}

fn parse_entry(raw: &str) -> Option<ModelLabel> {
    let caps = ENTRY_PATTERN.captures(raw)?;
    let index = caps.get(1)?.as_str().parse().ok()?;
    let name = caps.get(2).or_else(|| caps.get(3))?.as_str().to_string();
    Some(ModelLabel {
        index,
        name,
        raw: raw.to_string(),
    })
}
