use thiserror::Error;

/// Failures that abort a crawl or search call before any traversal.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Per-task fetch failure. Never fatal to the crawl: the task is dropped
/// and its URL stays out of the visited set, so another parent may queue
/// it again.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
