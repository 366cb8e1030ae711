// tests/support/helpers.rs
use super::builders::seeded_store;
use super::mocks::{FailingStore, InMemoryStore};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use newsdesk::application::services::ApplicationServices;
use newsdesk::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    comment::CommentRepository,
    topic::TopicRepository,
    user::UserRepository,
};
use newsdesk::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_services(store: &Arc<InMemoryStore>) -> ApplicationServices {
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let topics: Arc<dyn TopicRepository> = store.clone();
    let comments: Arc<dyn CommentRepository> = store.clone();
    let users: Arc<dyn UserRepository> = store.clone();
    ApplicationServices::new(article_read, article_write, topics, comments, users)
}

pub fn build_test_state(store: &Arc<InMemoryStore>) -> HttpState {
    HttpState {
        services: Arc::new(build_services(store)),
    }
}

/// Router over the given store with rate limiting off.
pub fn make_test_router(store: &Arc<InMemoryStore>) -> axum::Router {
    build_router(build_test_state(store))
}

pub fn make_seeded_router() -> (axum::Router, Arc<InMemoryStore>) {
    let store = seeded_store();
    (make_test_router(&store), store)
}

/// Router whose every repository call fails.
pub fn make_failing_router() -> axum::Router {
    let failing = Arc::new(FailingStore);
    let services = ApplicationServices::new(
        failing.clone(),
        failing.clone(),
        failing.clone(),
        failing.clone(),
        failing,
    );
    build_router(HttpState {
        services: Arc::new(services),
    })
}

pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &axum::Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Asserts the status and the `{ error, msg }` error body.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_msg: &str) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let error = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg = json.get("msg").and_then(Value::as_str).unwrap_or("");
    assert_eq!(
        error,
        expected_status.canonical_reason().unwrap_or("error"),
        "unexpected error field: {json}"
    );
    assert_eq!(msg, expected_msg, "unexpected msg field: {json}");
}

pub fn ids(articles: &Value) -> Vec<i64> {
    articles
        .as_array()
        .expect("array of articles")
        .iter()
        .map(|article| article["article_id"].as_i64().expect("article_id"))
        .collect()
}
