use crate::request::{CrawlRequest, CrawlResponse};
use crate::session::SessionRegistry;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use sitegrep_engine::{Crawler, EngineError, ResultEntry, search};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Options for configuring a crawl execution.
pub struct CrawlOptions {
    pub request: CrawlRequest,
    pub show_progress_bar: bool,
}

/// Run one crawl session end to end: normalize the seed, register a
/// progress slot, drive the engine, and shape the response.
///
/// Returns the session id alongside the response so callers can keep
/// polling the registry for the final snapshot.
pub async fn execute_crawl(
    options: CrawlOptions,
    registry: &SessionRegistry,
) -> Result<(String, CrawlResponse), EngineError> {
    let CrawlOptions {
        request,
        show_progress_bar,
    } = options;

    let seed = request.normalized_seed().ok_or_else(|| {
        EngineError::InvalidSeed(format!("unparsable seed URL: {}", request.seed_url))
    })?;
    debug!("Normalized seed {} -> {}", request.seed_url, seed);

    let (session_id, handle) = registry.register(request.depth_limit, request.width_limit);

    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(pb)
    } else {
        None
    };

    // Feed the spinner from the session's snapshot while the crawl runs.
    let ticker = progress_bar.as_ref().map(|pb| {
        let pb = pb.clone();
        let handle = handle.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(100)).await;
                let snapshot = handle.lock().unwrap().clone();
                if !snapshot.current_url.is_empty() {
                    pb.set_message(format!(
                        "Crawling {} (depth {}/{}, {} visited, {} matched)",
                        snapshot.current_url,
                        snapshot.current_depth,
                        snapshot.max_depth,
                        snapshot.total_visited,
                        snapshot.matched_count,
                    ));
                }
                pb.tick();
            }
        })
    });

    let mut crawler = Crawler::with_timeout(request.timeout)
        .with_max_depth(request.depth_limit)
        .with_max_width(request.width_limit)
        .with_progress(handle.clone());
    if !request.keyword.is_empty() {
        crawler = crawler.with_keyword(request.keyword.clone());
    }

    let outcome = crawler.crawl(&seed).await;

    if let Some(ticker) = ticker {
        ticker.abort();
    }
    if let Some(pb) = progress_bar {
        let snapshot = handle.lock().unwrap().clone();
        pb.finish_with_message(format!(
            "Crawl complete! {} pages visited, {} matched",
            snapshot.total_visited, snapshot.matched_count
        ));
    }

    let entries = outcome?;
    Ok((session_id, CrawlResponse::ok(request, entries)))
}

/// Keyword search over a site: facade preconditions first, then the same
/// single-pass crawl with the keyword filter inline.
pub async fn execute_search(
    options: CrawlOptions,
    registry: &SessionRegistry,
) -> Result<(String, CrawlResponse), EngineError> {
    let request = &options.request;
    search::validate(
        &request.keyword,
        &request.seed_url,
        request.depth_limit,
        request.width_limit,
    )?;
    execute_crawl(options, registry).await
}

/// Extract the path component from a URL, for compact report lines.
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Generate a text report from crawl results, grouped by host.
pub fn generate_crawl_report(entries: &[ResultEntry]) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Pages reported: {}\n", entries.len()));

    let deepest = entries.iter().map(|e| e.depth).max().unwrap_or(0);
    report.push_str(&format!("  Deepest page: {} hop(s) from the seed\n", deepest));
    report.push_str(&format!(
        "  Generated: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    // Group results by host
    let mut by_host: HashMap<String, Vec<&ResultEntry>> = HashMap::new();
    for entry in entries {
        if let Ok(url) = Url::parse(&entry.url)
            && let Some(host) = url.host_str()
        {
            by_host.entry(host.to_string()).or_default().push(entry);
        }
    }

    for (host, host_entries) in by_host.iter() {
        report.push_str(&format!("## {}\n", host));
        report.push_str(&format!("  {} pages found\n\n", host_entries.len()));

        for entry in host_entries {
            let path = extract_url_path(&entry.url);
            let mut line = format!("  [d{}.{}] {}", entry.depth, entry.width_index, path);
            if !entry.title.is_empty() {
                line.push_str(&format!("  \x1b[90m{}\x1b[0m", entry.title));
            }
            report.push_str(&line);
            report.push('\n');
        }
        report.push('\n');
    }

    report
}
