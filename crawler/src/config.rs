use crate::fetch::RetryPolicy;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "webscour-bot/0.1 (+https://example.com/bot)";

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Stop once this many pages have been visited.
    pub max_pages: usize,
    pub retry: RetryPolicy,
    /// Pause after every fetched (or given up) URL.
    pub courtesy_delay: Duration,
    pub pages_dir: PathBuf,
    /// Defaults to `visited.txt` next to `pages_dir`.
    pub visited_file: Option<PathBuf>,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: 20,
            retry: RetryPolicy::default(),
            courtesy_delay: Duration::from_millis(500),
            pages_dir: PathBuf::from("pages"),
            visited_file: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
