//! Fetcher and poller tests against an in-process HTTP stub.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use jex_collect::{CollectError, Poller, StatusFetcher, StatusSource};
use jex_metrics::NodeGauges;

const STATUS_DOC: &str =
    r#"{"computer":[{"displayName":"node1","offline":false},{"displayName":"node2","offline":true,"temporarilyOffline":true}]}"#;

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn serve_status(body: &'static str) -> String {
    let app = Router::new().route("/computer/api/json", get(move || async move { body }));
    let addr = serve(app).await;
    format!("http://{}", addr)
}

/// An address with nothing listening on it.
async fn unreachable_target() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn fetch_decodes_status_document() {
    let target = serve_status(STATUS_DOC).await;
    let fetcher = StatusFetcher::new().unwrap();

    let nodes = fetcher.fetch(&target).await.unwrap();

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].display_name, "node1");
    assert!(!nodes[0].offline);
    assert!(nodes[1].offline);
    assert!(nodes[1].temporarily_offline);
}

#[tokio::test]
async fn fetch_rejects_malformed_body() {
    let target = serve_status("<html>not json</html>").await;
    let fetcher = StatusFetcher::new().unwrap();

    let err = fetcher.fetch(&target).await.unwrap_err();
    assert!(matches!(err, CollectError::InvalidDocument { .. }));
}

#[tokio::test]
async fn fetch_rejects_non_2xx_response() {
    // No route mounted: the stub answers 404 for the status path.
    let addr = serve(Router::new()).await;
    let fetcher = StatusFetcher::new().unwrap();

    let err = fetcher.fetch(&format!("http://{}", addr)).await.unwrap_err();
    assert!(matches!(err, CollectError::HttpRequest(_)));
}

#[tokio::test]
async fn fetch_fails_on_unreachable_target() {
    let target = unreachable_target().await;
    let fetcher = StatusFetcher::new().unwrap();

    let err = fetcher.fetch(&target).await.unwrap_err();
    assert!(matches!(err, CollectError::HttpRequest(_)));
}

#[tokio::test]
async fn fetch_times_out_on_slow_target() {
    let app = Router::new().route(
        "/computer/api/json",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            STATUS_DOC
        }),
    );
    let addr = serve(app).await;
    let fetcher = StatusFetcher::with_timeout(Duration::from_millis(50)).unwrap();

    let err = fetcher.fetch(&format!("http://{}", addr)).await.unwrap_err();
    assert!(matches!(err, CollectError::HttpRequest(_)));
}

#[tokio::test]
async fn cycle_publishes_reachable_targets_and_skips_unreachable() {
    let target_a = serve_status(r#"{"computer":[{"displayName":"node1","offline":false}]}"#).await;
    let target_b = unreachable_target().await;

    let gauges = Arc::new(NodeGauges::new().unwrap());
    let poller = Poller::new(
        StatusFetcher::new().unwrap(),
        vec![target_a.clone(), target_b.clone()],
        Arc::clone(&gauges),
    );

    poller.run_cycle().await;

    let body = gauges.render().unwrap();
    assert!(body.contains(&format!(r#"online_status{{node="node1",url="{}"}} 1"#, target_a)));
    assert!(!body.contains(&target_b));
}
