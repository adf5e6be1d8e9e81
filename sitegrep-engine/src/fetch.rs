use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Single-request page fetcher. One GET per call with the configured
/// timeout, no retries; redirects are whatever the client follows on its
/// own.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("sitegrep/0.1 (https://github.com/halcyard/sitegrep)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch a page body. Non-200 statuses and transport failures come
    /// back as typed errors so the caller can drop the task without
    /// aborting the whole crawl.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status(status));
        }
        Ok(response.text().await?)
    }
}
