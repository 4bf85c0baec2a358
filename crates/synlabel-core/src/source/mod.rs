//! Label list sources.
//!
//! Defines the [`LabelSource`] trait plus HTTP(S) ([`HttpLabelSource`]) and
//! filesystem ([`FileLabelSource`]) implementations. Anonymous `s3://`
//! locations are served over the bucket's public HTTPS endpoint.

mod file;
mod http;
mod location;
#[cfg(test)]
pub mod mock;

pub use file::FileLabelSource;
pub use http::HttpLabelSource;
pub use location::{parse_location, Location};

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::labels::ModelLabelList;

/// Class-label list published by Saturn Cloud alongside the Stanford Dogs
/// sample data; the ImageNet-1k index/label dump.
pub const DEFAULT_LABELS_LOCATION: &str =
    "s3://saturn-public-data/dogs/imagenet1000_clsidx_to_labels.txt";

/// Somewhere a label list can be read from.
#[async_trait]
pub trait LabelSource: Send + Sync {
    /// Fetch the whole list as text.
    async fn fetch_text(&self) -> Result<String, CoreError>;

    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Build the source for a location string (`http(s)://`, `s3://`,
/// `file://`, or a bare filesystem path).
pub fn open_source(location: &str, timeout: Duration) -> Result<Box<dyn LabelSource>, CoreError> {
    match parse_location(location)? {
        Location::Http(url) => Ok(Box::new(HttpLabelSource::new(url, timeout)?)),
        Location::File(path) => Ok(Box::new(FileLabelSource::new(path))),
    }
}

/// Fetch and parse a label list. Called once at startup; the result is
/// read-only afterwards.
pub async fn load_label_list(source: &dyn LabelSource) -> Result<ModelLabelList, CoreError> {
    let text = source.fetch_text().await?;
    let list = ModelLabelList::parse(&text)?;
    tracing::debug!(
        source = %source.describe(),
        entries = list.len(),
        "parsed model label list"
    );
    if list.is_empty() {
        tracing::warn!(source = %source.describe(), "model label list is empty");
    }
    Ok(list)
}
