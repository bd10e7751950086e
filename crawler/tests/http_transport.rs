use crawler::{AttemptError, FetchError, Fetcher, HttpTransport, RetryPolicy};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quick_policy() -> RetryPolicy {
    RetryPolicy { max_attempts: 3, timeout: Duration::from_secs(2), backoff: Duration::from_millis(10) }
}

#[tokio::test]
async fn fetches_body_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(HttpTransport::new("webscour-test").unwrap(), quick_policy());
    let page = fetcher.fetch(&format!("{}/hello", server.uri())).await.unwrap();
    assert_eq!(page.status, 200);
    assert_eq!(page.body, "<html>hello</html>");
}

#[tokio::test]
async fn server_errors_are_retried_then_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(HttpTransport::new("webscour-test").unwrap(), quick_policy());
    let err = fetcher.fetch(&format!("{}/down", server.uri())).await.unwrap_err();
    match err {
        FetchError::Exhausted { attempts, last, .. } => {
            assert_eq!(attempts, 3);
            assert_eq!(last, AttemptError::Status(503));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let policy = RetryPolicy { max_attempts: 1, timeout: Duration::from_millis(50), ..quick_policy() };
    let fetcher = Fetcher::new(HttpTransport::new("webscour-test").unwrap(), policy);
    let err = fetcher.fetch(&server.uri()).await.unwrap_err();
    assert!(matches!(err, FetchError::Exhausted { last: AttemptError::Timeout, .. }), "{err:?}");
}
