use super::*;
use anyhow::Result;
use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::oneshot};

async fn comments_handler() -> Json<Value> {
    Json(json!([
        {"postId": 1, "id": 1, "name": "id labore ex et quam laborum", "email": "Eliseo@gardner.biz"},
        {"postId": 1, "id": 2, "name": "quo vero reiciendis velit similique earum", "email": "Jayne_Kuhic@sydney.com"}
    ]))
}

async fn failing_handler() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn object_handler() -> Json<Value> {
    Json(json!({"data": []}))
}

async fn spawn_comments_server() -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/comments", get(comments_handler))
        .route("/broken", get(failing_handler))
        .route("/object", get(object_handler));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

struct StaticSource(Vec<CommentRecord>);

#[async_trait]
impl CommentSource for StaticSource {
    async fn fetch_records(&self) -> Result<Vec<CommentRecord>, FetchError> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn fetch_comments_packages_record_names() {
    let base = spawn_comments_server().await.expect("spawn server");
    let fetcher = CommentFetcher::http(&format!("{base}/comments")).expect("fetcher");

    let action = fetcher.fetch_comments().await.expect("fetch");
    assert_eq!(
        action,
        Action::FetchComments(vec![
            CommentRecord::new("id labore ex et quam laborum"),
            CommentRecord::new("quo vero reiciendis velit similique earum"),
        ])
    );
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let base = spawn_comments_server().await.expect("spawn server");
    let fetcher = CommentFetcher::http(&format!("{base}/broken")).expect("fetcher");

    let err = fetcher.fetch_comments().await.expect_err("should fail");
    assert!(matches!(err, FetchError::Status { status: 500 }));
}

#[tokio::test]
async fn missing_route_is_reported_as_status() {
    let base = spawn_comments_server().await.expect("spawn server");
    let fetcher = CommentFetcher::http(&format!("{base}/nope")).expect("fetcher");

    let err = fetcher.fetch_comments().await.expect_err("should fail");
    assert!(matches!(err, FetchError::Status { status: 404 }));
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let base = spawn_comments_server().await.expect("spawn server");
    let fetcher = CommentFetcher::http(&format!("{base}/object")).expect("fetcher");

    let err = fetcher.fetch_comments().await.expect_err("should fail");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let fetcher = CommentFetcher::http(&format!("http://{addr}/comments")).expect("fetcher");
    let err = fetcher.fetch_comments().await.expect_err("should fail");
    assert!(matches!(err, FetchError::Request(_)));
}

#[test]
fn invalid_endpoint_is_rejected_up_front() {
    let err = HttpCommentSource::new("not a url").err().expect("should fail");
    assert!(matches!(err, FetchError::InvalidEndpoint { .. }));
}

#[test]
fn default_endpoint_parses() {
    let source = HttpCommentSource::new(DEFAULT_COMMENTS_URL).expect("source");
    assert_eq!(source.endpoint().path(), "/comments");
}

#[tokio::test]
async fn spawn_delivers_result_to_callback() {
    let fetcher = CommentFetcher::new(Arc::new(StaticSource(vec![
        CommentRecord::new("a"),
        CommentRecord::new("b"),
    ])));
    let (tx, rx) = oneshot::channel();

    fetcher
        .spawn(move |result| {
            let _ = tx.send(result);
        })
        .await
        .expect("join");

    let action = rx.await.expect("delivered").expect("fetch ok");
    assert_eq!(
        action,
        Action::FetchComments(vec![CommentRecord::new("a"), CommentRecord::new("b")])
    );
}
