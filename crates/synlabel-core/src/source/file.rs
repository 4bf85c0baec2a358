use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::CoreError;

use super::LabelSource;

/// Label list stored on the local filesystem.
pub struct FileLabelSource {
    path: PathBuf,
}

impl FileLabelSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LabelSource for FileLabelSource {
    async fn fetch_text(&self) -> Result<String, CoreError> {
        tracing::debug!(path = %self.path.display(), "reading label list");
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
