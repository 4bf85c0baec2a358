use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("label source request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("label source {url} answered with HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("invalid label source: {0}")]
    InvalidSource(String),

    #[error("label parse error at line {line}: {message}")]
    LabelParse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
