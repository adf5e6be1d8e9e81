use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Point-in-time view of an in-progress or completed crawl, overwritten
/// after each processed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub current_depth: usize,
    pub current_width: usize,
    pub max_depth: usize,
    pub max_width: usize,
    pub current_url: String,
    pub total_visited: usize,
    pub matched_count: usize,
}

impl ProgressSnapshot {
    pub fn new(max_depth: usize, max_width: usize) -> Self {
        Self {
            current_depth: 0,
            current_width: 0,
            max_depth,
            max_width,
            current_url: String::new(),
            total_visited: 0,
            matched_count: 0,
        }
    }
}

/// Shared slot for one crawl's progress. Every crawl gets its own handle;
/// status pollers read it while the crawl runs to completion elsewhere.
pub type ProgressHandle = Arc<Mutex<ProgressSnapshot>>;

pub fn progress_handle(max_depth: usize, max_width: usize) -> ProgressHandle {
    Arc::new(Mutex::new(ProgressSnapshot::new(max_depth, max_width)))
}
