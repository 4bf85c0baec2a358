use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, trace};

use crate::error::CoreError;

use super::LabelSource;

/// Anonymous HTTP(S) label source.
pub struct HttpLabelSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpLabelSource {
    /// `timeout` bounds the whole request; connecting gets at most 10s of it.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl LabelSource for HttpLabelSource {
    async fn fetch_text(&self) -> Result<String, CoreError> {
        debug!(url = %self.url, "fetching label list");
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::HttpStatus {
                url: self.url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        debug!(url = %self.url, %status, body_len = body.len(), "label list response");
        trace!(url = %self.url, body = %body, "label list body");
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
