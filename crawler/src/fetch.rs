use reqwest::{redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

/// Status and body of one GET, whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Why a single attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("unsuccessful status {0}")]
    Status(u16),
    #[error("failed to read body: {0}")]
    Body(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl AttemptError {
    /// Transient failures are worth another attempt; a request that cannot even be built is not.
    pub fn is_retriable(&self) -> bool {
        !matches!(self, Self::InvalidRequest(_))
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("giving up on {url} after {attempts} attempts: {last}")]
    Exhausted { url: String, attempts: u32, last: AttemptError },
    #[error("cannot fetch {url}: {source}")]
    Rejected { url: String, source: AttemptError },
}

/// The HTTP GET capability the crawler depends on.
pub trait Transport {
    fn get(&self, url: &str, timeout: Duration) -> impl Future<Output = Result<RawResponse, AttemptError>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, timeout: Duration) -> impl Future<Output = Result<RawResponse, AttemptError>> {
        (**self).get(url, timeout)
    }
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }
}

fn classify(e: reqwest::Error) -> AttemptError {
    if e.is_builder() {
        AttemptError::InvalidRequest(e.to_string())
    } else if e.is_timeout() {
        AttemptError::Timeout
    } else if e.is_connect() {
        AttemptError::Connect(e.to_string())
    } else if e.is_body() || e.is_decode() {
        AttemptError::Body(e.to_string())
    } else {
        AttemptError::Network(e.to_string())
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<RawResponse, AttemptError> {
        let resp = self.client.get(url).timeout(timeout).send().await.map_err(classify)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(classify)?;
        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub timeout: Duration,
    /// Fixed pause between a failed attempt and the next one.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3, timeout: Duration::from_secs(8), backoff: Duration::from_secs(1) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

pub struct Fetcher<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> &RetryPolicy { &self.policy }

    async fn attempt(&self, url: &str) -> Result<FetchedPage, AttemptError> {
        let resp = self.transport.get(url, self.policy.timeout).await?;
        // 2xx and 3xx count as success
        if !(200..400).contains(&resp.status) {
            return Err(AttemptError::Status(resp.status));
        }
        Ok(FetchedPage { url: url.to_string(), status: resp.status, body: resp.body })
    }

    /// GET with up to `max_attempts` tries and a fixed backoff in between.
    /// There is no wait after the last failed attempt.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let err = match self.attempt(url).await {
                Ok(page) => return Ok(page),
                Err(e) => e,
            };
            if !err.is_retriable() {
                return Err(FetchError::Rejected { url: url.to_string(), source: err });
            }
            tracing::warn!(url, attempt, error = %err, "fetch attempt failed");
            if attempt >= attempts {
                return Err(FetchError::Exhausted { url: url.to_string(), attempts, last: err });
            }
            sleep(self.policy.backoff).await;
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tokio::time::Instant;

    struct Scripted {
        replies: RefCell<VecDeque<Result<RawResponse, AttemptError>>>,
        calls: RefCell<u32>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<RawResponse, AttemptError>>) -> Self {
            Self { replies: RefCell::new(replies.into()), calls: RefCell::new(0) }
        }
    }

    impl Transport for Scripted {
        async fn get(&self, _url: &str, _timeout: Duration) -> Result<RawResponse, AttemptError> {
            *self.calls.borrow_mut() += 1;
            self.replies.borrow_mut().pop_front().unwrap_or(Err(AttemptError::Timeout))
        }
    }

    fn ok(body: &str) -> Result<RawResponse, AttemptError> {
        Ok(RawResponse { status: 200, body: body.to_string() })
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_third_attempt() {
        let t = Scripted::new(vec![Err(AttemptError::Timeout), Ok(RawResponse { status: 503, body: String::new() }), ok("hi")]);
        let fetcher = Fetcher::new(&t, RetryPolicy::default());
        let start = Instant::now();
        let page = fetcher.fetch("https://example.com/").await.unwrap();
        assert_eq!(page.body, "hi");
        assert_eq!(*t.calls.borrow(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_without_trailing_wait() {
        let t = Scripted::new(vec![Err(AttemptError::Connect("refused".into())); 3]);
        let fetcher = Fetcher::new(&t, RetryPolicy::default());
        let start = Instant::now();
        let err = fetcher.fetch("https://example.com/").await.unwrap_err();
        match err {
            FetchError::Exhausted { attempts, last, .. } => {
                assert_eq!(attempts, 3);
                assert_eq!(last, AttemptError::Connect("refused".into()));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(*t.calls.borrow(), 3);
        // two backoffs, none after the final attempt
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn redirect_status_is_success() {
        let t = Scripted::new(vec![Ok(RawResponse { status: 301, body: "moved".into() })]);
        let page = Fetcher::new(&t, RetryPolicy::default()).fetch("https://example.com/").await.unwrap();
        assert_eq!(page.status, 301);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_request_is_not_retried() {
        let t = Scripted::new(vec![Err(AttemptError::InvalidRequest("bad url".into()))]);
        let err = Fetcher::new(&t, RetryPolicy::default()).fetch("::").await.unwrap_err();
        assert!(matches!(err, FetchError::Rejected { .. }));
        assert_eq!(*t.calls.borrow(), 1);
    }
}
