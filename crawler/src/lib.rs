//! Single-site breadth-first crawler: validate, fetch with retry, extract, persist.

pub mod config;
pub mod engine;
pub mod fetch;
pub mod frontier;
pub mod links;
pub mod validate;

pub use config::CrawlConfig;
pub use engine::{CrawlEngine, CrawlError, CrawlSummary};
pub use fetch::{AttemptError, FetchError, FetchedPage, Fetcher, HttpTransport, RawResponse, RetryPolicy, Transport};
pub use frontier::Frontier;
pub use links::LinkExtractor;
