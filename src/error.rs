use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordNetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned {status} for {url}")]
    Status { status : u16, url : String },
    #[error("unknown index: {0}")]
    UnknownIndex(String),
    #[error("bad configuration: {0}")]
    Config(String)
}
