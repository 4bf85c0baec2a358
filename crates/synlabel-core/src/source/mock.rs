//! In-memory label source for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::CoreError;

use super::LabelSource;

/// Serves a fixed text (or a fixed failure) and counts fetches.
pub struct MockLabelSource {
    text: Option<String>,
    fetches: AtomicUsize,
}

impl MockLabelSource {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_owned()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Every fetch fails with a `NotFound` I/O error.
    pub fn failing() -> Self {
        Self {
            text: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LabelSource for MockLabelSource {
    async fn fetch_text(&self) -> Result<String, CoreError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.text.clone().ok_or_else(|| {
            CoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "mock label source has no text",
            ))
        })
    }

    fn describe(&self) -> String {
        "mock".to_owned()
    }
}
