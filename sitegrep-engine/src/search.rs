use crate::crawler::Crawler;
use crate::error::EngineError;
use crate::result::ResultEntry;

/// Find all in-scope pages whose rendered text contains `keyword`.
///
/// Matching happens inline during a single crawl pass, so every page is
/// fetched exactly once. Preconditions are checked up front; violations
/// return a `Validation` error and no traversal is attempted.
pub async fn search(
    keyword: &str,
    start_url: &str,
    max_depth: usize,
    max_width: usize,
    timeout_secs: u64,
) -> Result<Vec<ResultEntry>, EngineError> {
    validate(keyword, start_url, max_depth, max_width)?;
    Crawler::with_timeout(timeout_secs)
        .with_max_depth(max_depth)
        .with_max_width(max_width)
        .with_keyword(keyword)
        .crawl(start_url)
        .await
}

/// Search preconditions: keyword and start URL non-empty, depth and
/// width at least 1.
pub fn validate(
    keyword: &str,
    start_url: &str,
    max_depth: usize,
    max_width: usize,
) -> Result<(), EngineError> {
    if keyword.trim().is_empty() {
        return Err(EngineError::Validation("keyword must not be empty".into()));
    }
    if start_url.trim().is_empty() {
        return Err(EngineError::Validation("start URL must not be empty".into()));
    }
    if max_depth < 1 {
        return Err(EngineError::Validation("max depth must be at least 1".into()));
    }
    if max_width < 1 {
        return Err(EngineError::Validation("max width must be at least 1".into()));
    }
    Ok(())
}
