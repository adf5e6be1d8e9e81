use crate::error::EngineError;
use crate::extract;
use crate::fetch::PageFetcher;
use crate::frontier::{CrawlTask, Frontier};
use crate::matcher;
use crate::progress::ProgressHandle;
use crate::result::ResultEntry;
use crate::scope::ScopeContext;
use scraper::Html;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

/// Breadth-first crawl orchestrator.
///
/// Pages are fetched strictly one at a time in dequeue order; the only
/// suspension point is the network wait of the current fetch. Results
/// come back in BFS order, which is also non-decreasing depth order.
pub struct Crawler {
    fetcher: PageFetcher,
    max_depth: usize,
    max_width: usize,
    keyword: Option<String>,
    progress: Option<ProgressHandle>,
}

impl Crawler {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            fetcher: PageFetcher::new(timeout_secs),
            max_depth: 3,
            max_width: 5,
            keyword: None,
            progress: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Restrict results to pages whose text contains `keyword`
    /// case-insensitively. An empty keyword leaves the crawl unfiltered.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        if !keyword.is_empty() {
            self.keyword = Some(keyword);
        }
        self
    }

    pub fn with_progress(mut self, progress: ProgressHandle) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run the crawl to completion, until the frontier empties.
    ///
    /// Per-page fetch failures are absorbed: the task is dropped, its URL
    /// stays unvisited, and the crawl continues. Only an unparsable seed
    /// fails the whole call.
    pub async fn crawl(&self, start_url: &str) -> Result<Vec<ResultEntry>, EngineError> {
        info!(
            "Starting crawl of {} (max depth {}, max width {})",
            start_url, self.max_depth, self.max_width
        );

        let seed = Url::parse(start_url)
            .map_err(|e| EngineError::InvalidSeed(format!("{start_url}: {e}")))?;
        if seed.host_str().is_none() {
            return Err(EngineError::InvalidSeed(format!("{start_url}: missing host")));
        }
        let scope = ScopeContext::from_seed(&seed);

        let mut visited: HashSet<String> = HashSet::new();
        let mut results: Vec<ResultEntry> = Vec::new();
        let mut frontier = Frontier::new();
        frontier.enqueue(CrawlTask::seed(start_url.to_string()));

        while let Some(task) = frontier.dequeue() {
            if visited.contains(&task.url) {
                debug!("Already visited: {}", task.url);
                continue;
            }
            // Expansion never queues past max_depth; guard anyway.
            if task.depth > self.max_depth {
                debug!("Max depth exceeded for: {}", task.url);
                continue;
            }
            if !scope.in_scope(&task.url) {
                debug!(
                    "Skipping {} (outside base domain: {})",
                    task.url,
                    scope.base_domain()
                );
                continue;
            }

            let body = match self.fetcher.fetch(&task.url).await {
                Ok(body) => body,
                Err(e) => {
                    // Dropped without joining the visited set, so the URL
                    // may be retried if another parent links to it.
                    warn!("Failed to fetch {}: {}", task.url, e);
                    continue;
                }
            };

            // Text extraction and link discovery share one parsed document.
            let (content, links) = {
                let document = Html::parse_document(&body);
                let content = extract::extract(&document);
                let links = extract::extract_links(&document, &task.url);
                (content, links)
            };
            debug!("Found {} links on {}", links.len(), task.url);

            if matcher::matches(&content.text, self.keyword.as_deref()) {
                results.push(ResultEntry {
                    url: task.url.clone(),
                    title: content.title,
                    depth: task.depth,
                    width_index: task.width_index,
                    parent: task.parent.clone(),
                    text: content.text,
                });
            }

            visited.insert(task.url.clone());
            self.update_progress(&task, visited.len(), results.len());

            if task.depth < self.max_depth {
                self.expand(&mut frontier, &scope, &visited, &task, &links);
            }
        }

        info!(
            "Crawl finished. Total pages visited: {}. Total results: {}.",
            visited.len(),
            results.len()
        );
        Ok(results)
    }

    fn update_progress(&self, task: &CrawlTask, total_visited: usize, matched_count: usize) {
        if let Some(progress) = &self.progress {
            let mut snapshot = progress.lock().unwrap();
            snapshot.current_depth = task.depth;
            snapshot.current_width = task.width_index;
            snapshot.current_url = task.url.clone();
            snapshot.total_visited = total_visited;
            snapshot.matched_count = matched_count;
        }
    }

    /// Admit up to `max_width` child links in document order. Links that
    /// are out of scope, already visited, or already queued do not count
    /// toward the width budget.
    fn expand(
        &self,
        frontier: &mut Frontier,
        scope: &ScopeContext,
        visited: &HashSet<String>,
        task: &CrawlTask,
        links: &[String],
    ) {
        let mut admitted = 0usize;
        for link in links {
            if admitted == self.max_width {
                break;
            }
            if !scope.in_scope(link) || visited.contains(link) || frontier.is_pending(link) {
                continue;
            }
            admitted += 1;
            debug!(
                "Queueing link: {} (parent: {}, next depth: {})",
                link,
                task.url,
                task.depth + 1
            );
            frontier.enqueue(CrawlTask {
                url: link.clone(),
                depth: task.depth + 1,
                width_index: admitted,
                parent: Some(task.url.clone()),
            });
        }
        if admitted > 0 {
            info!(
                "Selected {} new links at depth {} from {}",
                admitted,
                task.depth + 1,
                task.url
            );
        }
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot crawl entry point: breadth-first traversal from `start_url`,
/// optionally filtered by `keyword`.
pub async fn crawl(
    start_url: &str,
    max_depth: usize,
    max_width: usize,
    timeout_secs: u64,
    keyword: Option<&str>,
) -> Result<Vec<ResultEntry>, EngineError> {
    let mut crawler = Crawler::with_timeout(timeout_secs)
        .with_max_depth(max_depth)
        .with_max_width(max_width);
    if let Some(keyword) = keyword {
        crawler = crawler.with_keyword(keyword);
    }
    crawler.crawl(start_url).await
}
