use crate::config::CrawlConfig;
use crate::fetch::{Fetcher, Transport};
use crate::frontier::Frontier;
use crate::links::LinkExtractor;
use crate::validate::is_eligible;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, Instant};
use url::Url;
use webscour_core::{PageStore, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub struct CrawlSummary {
    pub pages_crawled: usize,
    pub duplicate_count: usize,
    pub elapsed: Duration,
    /// Where the visited URLs were written.
    pub visited_file: PathBuf,
}

impl CrawlSummary {
    pub fn elapsed_seconds(&self) -> f64 { self.elapsed.as_secs_f64() }

    /// Every crawled page is a distinct URL.
    pub fn unique_urls(&self) -> usize { self.pages_crawled }
}

/// The only ways a crawl fails as a whole; everything after start-up degrades to skipping a URL.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("seed must be an absolute http(s) URL, got {0:?}")]
    InvalidSeed(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub struct CrawlEngine<T> {
    fetcher: Fetcher<T>,
    config: CrawlConfig,
}

impl<T: Transport> CrawlEngine<T> {
    pub fn new(transport: T, config: CrawlConfig) -> Self {
        let fetcher = Fetcher::new(transport, config.retry.clone());
        Self { fetcher, config }
    }

    pub fn config(&self) -> &CrawlConfig { &self.config }

    /// Breadth-first crawl of the seed's site until the frontier drains or `max_pages` is hit.
    pub async fn run(&self, seed: &str) -> Result<CrawlSummary, CrawlError> {
        let seed_url = match Url::parse(seed.trim()) {
            Ok(u) if is_eligible(u.as_str()) => u,
            _ => return Err(CrawlError::InvalidSeed(seed.to_string())),
        };
        let mut store = PageStore::create(&self.config.pages_dir)?;
        if let Some(path) = &self.config.visited_file {
            store = store.with_visited_path(path);
        }
        let links = LinkExtractor::for_seed(&seed_url);

        let mut frontier = Frontier::new();
        frontier.enqueue(seed_url.clone());
        let mut duplicates = 0usize;
        let start = Instant::now();
        tracing::info!(seed = %seed_url, domain = links.seed_netloc(), max_pages = self.config.max_pages, "crawl started");

        while !frontier.is_empty() && Frontier::has_capacity_for(frontier.visited_count(), self.config.max_pages) {
            let Some(url) = frontier.dequeue_next() else { break };
            if frontier.is_visited(&url) {
                duplicates += 1;
                tracing::debug!(url = %url, "already visited");
                continue;
            }

            match self.fetcher.fetch(url.as_str()).await {
                Err(e) => tracing::warn!(error = %e, "skipping url"),
                Ok(page) => match store.save(url.as_str(), &page.body) {
                    Err(e) => tracing::error!(url = %url, error = %e, "failed to save page, skipping"),
                    Ok(record) => {
                        tracing::info!(url = %url, path = %record.storage_path.display(), "saved page");
                        for link in links.extract_links(&url, &page.body) {
                            frontier.enqueue(link);
                        }
                        frontier.mark_visited(url);
                    }
                },
            }

            sleep(self.config.courtesy_delay).await;
        }

        if let Err(e) = store.persist_visited(frontier.visited()) {
            tracing::error!(error = %e, "failed to write visited urls");
        }
        let summary = CrawlSummary {
            pages_crawled: frontier.visited_count(),
            duplicate_count: duplicates,
            elapsed: start.elapsed(),
            visited_file: store.visited_path().to_path_buf(),
        };
        tracing::info!(
            pages = summary.pages_crawled,
            duplicates = summary.duplicate_count,
            queued = frontier.len(),
            "crawl finished"
        );
        Ok(summary)
    }
}
