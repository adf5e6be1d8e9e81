use serde::{Deserialize, Serialize};
use sitegrep_engine::ResultEntry;
use url::Url;

pub const DEFAULT_DEPTH_LIMIT: usize = 3;
pub const DEFAULT_WIDTH_LIMIT: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Page text can be large; responses carry a bounded excerpt.
const TEXT_EXCERPT_CHARS: usize = 280;

/// One crawl or search request as submitted by a front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlRequest {
    pub seed_url: String,
    /// Empty means an unfiltered crawl.
    #[serde(default)]
    pub keyword: String,
    #[serde(default = "default_depth_limit")]
    pub depth_limit: usize,
    #[serde(default = "default_width_limit")]
    pub width_limit: usize,
    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout: u64,
}

fn default_depth_limit() -> usize {
    DEFAULT_DEPTH_LIMIT
}

fn default_width_limit() -> usize {
    DEFAULT_WIDTH_LIMIT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl CrawlRequest {
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            keyword: String::new(),
            depth_limit: DEFAULT_DEPTH_LIMIT,
            width_limit: DEFAULT_WIDTH_LIMIT,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// The seed with `http://` prepended when no scheme was given, or
    /// None when the value still does not parse as a URL.
    pub fn normalized_seed(&self) -> Option<String> {
        normalize_seed(&self.seed_url)
    }
}

/// Auto-add the `http://` prefix when the scheme is missing, then make
/// sure the result actually parses.
pub fn normalize_seed(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    let parsed = Url::parse(&candidate).ok()?;
    parsed.host_str()?;
    Some(candidate)
}

/// A completed crawl or search, shaped for a front end: status, ordered
/// entries with excerpted text, count, and the echoed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResponse {
    pub status: String,
    pub message: Option<String>,
    pub results: Vec<ResultEntry>,
    pub count: usize,
    pub request: CrawlRequest,
}

impl CrawlResponse {
    pub fn ok(request: CrawlRequest, entries: Vec<ResultEntry>) -> Self {
        let results: Vec<ResultEntry> = entries
            .into_iter()
            .map(|mut entry| {
                entry.text = excerpt(&entry.text, TEXT_EXCERPT_CHARS);
                entry
            })
            .collect();
        Self {
            status: "ok".to_string(),
            message: None,
            count: results.len(),
            results,
            request,
        }
    }

    pub fn error(request: CrawlRequest, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            results: Vec::new(),
            count: 0,
            request,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_seed_adds_scheme() {
        assert_eq!(normalize_seed("upi.edu"), Some("http://upi.edu".to_string()));
    }

    #[test]
    fn test_normalize_seed_keeps_existing_scheme() {
        assert_eq!(
            normalize_seed("https://upi.edu/path"),
            Some("https://upi.edu/path".to_string())
        );
        assert_eq!(
            normalize_seed("http://upi.edu"),
            Some("http://upi.edu".to_string())
        );
    }

    #[test]
    fn test_normalize_seed_rejects_garbage() {
        assert_eq!(normalize_seed(""), None);
        assert_eq!(normalize_seed("   "), None);
        assert_eq!(normalize_seed("http://"), None);
    }

    #[test]
    fn test_request_defaults() {
        let request = CrawlRequest::new("upi.edu");
        assert_eq!(request.depth_limit, 3);
        assert_eq!(request.width_limit, 5);
        assert_eq!(request.timeout, 5);
        assert_eq!(request.keyword, "");
    }

    #[test]
    fn test_response_truncates_large_text() {
        let entry = ResultEntry {
            url: "http://upi.edu/".to_string(),
            title: "UPI".to_string(),
            depth: 0,
            width_index: 0,
            parent: None,
            text: "x".repeat(1000),
        };
        let response = CrawlResponse::ok(CrawlRequest::new("upi.edu"), vec![entry]);
        assert_eq!(response.count, 1);
        assert!(response.results[0].text.len() < 1000);
        assert!(response.results[0].text.ends_with("..."));
    }

    #[test]
    fn test_response_echoes_request() {
        let request = CrawlRequest::new("upi.edu").with_keyword("beasiswa");
        let response = CrawlResponse::ok(request, Vec::new());
        assert_eq!(response.status, "ok");
        assert_eq!(response.request.seed_url, "upi.edu");
        assert_eq!(response.request.keyword, "beasiswa");
    }

    #[test]
    fn test_error_response() {
        let response = CrawlResponse::error(CrawlRequest::new(""), "keyword must not be empty");
        assert_eq!(response.status, "error");
        assert_eq!(response.count, 0);
        assert!(response.results.is_empty());
        assert_eq!(
            response.message.as_deref(),
            Some("keyword must not be empty")
        );
    }
}
