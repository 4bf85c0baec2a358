use std::path::PathBuf;

use reqwest::Url;

use crate::error::CoreError;

/// A resolved label list location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Http(Url),
    File(PathBuf),
}

/// Resolve a user-supplied location.
///
/// - `http://...` / `https://...` are fetched as-is
/// - `s3://bucket/key` becomes `https://bucket.s3.amazonaws.com/key`
///   (anonymous, public-read buckets only)
/// - `file://...` and anything without a scheme are filesystem paths
pub fn parse_location(raw: &str) -> Result<Location, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidSource(
            "label location must not be empty".to_owned(),
        ));
    }

    if !trimmed.contains("://") {
        return Ok(Location::File(PathBuf::from(trimmed)));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        CoreError::InvalidSource(format!("invalid label location `{trimmed}`: {e}"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(Location::Http(parsed)),
        "s3" => s3_to_https(&parsed).map(Location::Http),
        "file" => parsed.to_file_path().map(Location::File).map_err(|()| {
            CoreError::InvalidSource(format!("`{trimmed}` is not a local file path"))
        }),
        other => Err(CoreError::InvalidSource(format!(
            "unsupported label location scheme `{other}`; expected http, https, s3 or file"
        ))),
    }
}

fn s3_to_https(s3: &Url) -> Result<Url, CoreError> {
    let bucket = s3
        .host_str()
        .filter(|bucket| !bucket.is_empty())
        .ok_or_else(|| CoreError::InvalidSource(format!("`{s3}` has no bucket name")))?;
    let key = s3.path().trim_start_matches('/');
    if key.is_empty() {
        return Err(CoreError::InvalidSource(format!("`{s3}` has no object key")));
    }

    let https = format!("https://{bucket}.s3.amazonaws.com/{key}");
    Url::parse(&https)
        .map_err(|e| CoreError::InvalidSource(format!("cannot map `{s3}` to HTTPS: {e}")))
}
