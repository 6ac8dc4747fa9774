use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use widget_domain::persist::InMemoryWidgetRepository;
use widget_domain::value_object::Version;
use widget_domain::widget::Widget;
use widget_server::{AppState, router};

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

fn app_with(widgets: Vec<Widget>) -> Router {
    let repo = InMemoryWidgetRepository::with_widgets(widgets).unwrap();
    router(AppState::new(Arc::new(repo)))
}

fn stored(id: u64, name: &str, description: &str, version: u64) -> Widget {
    Widget::restore(id, name, description, Version::from_value(version)).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    TestResponse {
        status,
        headers,
        body,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value, if_match: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(tag) = if_match {
        builder = builder.header(header::IF_MATCH, tag);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn edited() -> Value {
    json!({
        "id": 1,
        "name": "Edited Widget",
        "description": "This is my edited widget",
        "version": 1
    })
}

#[tokio::test]
async fn list_returns_all_widgets() {
    let app = app_with(vec![
        stored(1, "Widget Name", "Description", 1),
        stored(2, "Widget 2 Name", "Description 2", 4),
    ]);

    let resp = send(&app, get("/rest/widgets")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(header::CONTENT_TYPE), Some("application/json"));
    assert_eq!(resp.header(header::LOCATION), Some("/rest/widgets"));
    assert_eq!(
        resp.json(),
        json!([
            {"id": 1, "name": "Widget Name", "description": "Description", "version": 1},
            {"id": 2, "name": "Widget 2 Name", "description": "Description 2", "version": 4}
        ])
    );
}

#[tokio::test]
async fn list_of_empty_store_is_empty_array() {
    let app = app_with(vec![]);

    let resp = send(&app, get("/rest/widgets")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!([]));
}

#[tokio::test]
async fn get_widget_by_id() {
    let app = app_with(vec![stored(1, "Widget Name", "Description", 1)]);

    let resp = send(&app, get("/rest/widget/1")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(header::CONTENT_TYPE), Some("application/json"));
    assert_eq!(resp.header(header::LOCATION), Some("/rest/widget/1"));
    assert_eq!(resp.header(header::ETAG), Some("\"1\""));
    assert_eq!(
        resp.json(),
        json!({"id": 1, "name": "Widget Name", "description": "Description", "version": 1})
    );
}

#[tokio::test]
async fn get_unknown_widget_is_not_found_with_empty_body() {
    let app = app_with(vec![]);

    let resp = send(&app, get("/rest/widget/1")).await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.body.is_empty());
}

#[tokio::test]
async fn create_assigns_id_and_first_version() {
    let app = app_with(vec![]);

    let resp = send(
        &app,
        post_json(
            "/rest/widget",
            json!({"name": "New Widget", "description": "This is my widget"}),
        ),
    )
    .await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.header(header::CONTENT_TYPE), Some("application/json"));
    assert_eq!(resp.header(header::LOCATION), Some("/rest/widget/1"));
    assert_eq!(resp.header(header::ETAG), Some("\"1\""));
    assert_eq!(
        resp.json(),
        json!({"id": 1, "name": "New Widget", "description": "This is my widget", "version": 1})
    );
}

#[tokio::test]
async fn create_ignores_client_supplied_identity() {
    let app = app_with(vec![stored(1, "Existing", "", 3)]);

    let resp = send(
        &app,
        post_json(
            "/rest/widget",
            json!({"id": 42, "name": "New Widget", "description": "d", "version": 9}),
        ),
    )
    .await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.header(header::LOCATION), Some("/rest/widget/2"));
    let body = resp.json();
    assert_eq!(body["id"], 2);
    assert_eq!(body["version"], 1);
}

#[tokio::test]
async fn create_with_blank_name_is_unprocessable() {
    let app = app_with(vec![]);

    let resp = send(
        &app,
        post_json("/rest/widget", json!({"name": "  ", "description": "d"})),
    )
    .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.json()["error"].as_str().unwrap().contains("blank"));

    let list = send(&app, get("/rest/widgets")).await;
    assert_eq!(list.json(), json!([]));
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() {
    let app = app_with(vec![]);

    let request = Request::builder()
        .method("POST")
        .uri("/rest/widget")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let resp = send(&app, request).await;

    assert!(resp.status.is_client_error());
}

#[tokio::test]
async fn update_with_matching_version_increments_version() {
    let app = app_with(vec![stored(1, "New Widget", "This is my widget", 1)]);

    let resp = send(&app, put_json("/rest/widget/1", edited(), Some("1"))).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(header::CONTENT_TYPE), Some("application/json"));
    assert_eq!(resp.header(header::LOCATION), Some("/rest/widget/1"));
    assert_eq!(resp.header(header::ETAG), Some("\"2\""));
    assert_eq!(
        resp.json(),
        json!({
            "id": 1,
            "name": "Edited Widget",
            "description": "This is my edited widget",
            "version": 2
        })
    );
}

#[tokio::test]
async fn update_accepts_quoted_weak_and_wildcard_tags() {
    let app = app_with(vec![stored(1, "New Widget", "This is my widget", 1)]);

    let first = send(&app, put_json("/rest/widget/1", edited(), Some("\"1\""))).await;
    assert_eq!(first.header(header::ETAG), Some("\"2\""));

    let second = send(&app, put_json("/rest/widget/1", edited(), Some("W/\"2\""))).await;
    assert_eq!(second.header(header::ETAG), Some("\"3\""));

    let third = send(&app, put_json("/rest/widget/1", edited(), Some("*"))).await;
    assert_eq!(third.status, StatusCode::OK);
    assert_eq!(third.json()["version"], 4);
}

#[tokio::test]
async fn update_unknown_widget_is_not_found_with_empty_body() {
    let app = app_with(vec![]);

    let tags = [
        Some("0"),
        Some("1"),
        Some("*"),
        None,
        Some("abc"),
        Some("1, 2"),
        Some("-1"),
        Some("W/"),
    ];
    for tag in tags {
        let resp = send(&app, put_json("/rest/widget/1", edited(), tag)).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "If-Match {tag:?}");
        assert!(resp.body.is_empty());
    }
}

#[tokio::test]
async fn update_with_stale_version_is_precondition_failed() {
    let app = app_with(vec![stored(1, "New Widget", "This is my widget", 3)]);

    let resp = send(&app, put_json("/rest/widget/1", edited(), Some("2"))).await;
    assert_eq!(resp.status, StatusCode::PRECONDITION_FAILED);

    let current = send(&app, get("/rest/widget/1")).await;
    assert_eq!(current.header(header::ETAG), Some("\"3\""));
    assert_eq!(current.json()["name"], "New Widget");
}

#[tokio::test]
async fn update_without_if_match_is_precondition_required() {
    let app = app_with(vec![stored(1, "New Widget", "This is my widget", 1)]);

    let resp = send(&app, put_json("/rest/widget/1", edited(), None)).await;

    assert_eq!(resp.status, StatusCode::PRECONDITION_REQUIRED);
}

#[tokio::test]
async fn update_with_malformed_if_match_is_bad_request() {
    let app = app_with(vec![stored(1, "New Widget", "This is my widget", 1)]);

    let resp = send(&app, put_json("/rest/widget/1", edited(), Some("abc"))).await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.json()["error"].as_str().unwrap().contains("If-Match"));
}

#[tokio::test]
async fn update_listed_if_match_on_existing_widget_is_bad_request() {
    let app = app_with(vec![stored(1, "New Widget", "This is my widget", 1)]);

    let resp = send(&app, put_json("/rest/widget/1", edited(), Some("1, 2"))).await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let current = send(&app, get("/rest/widget/1")).await;
    assert_eq!(current.header(header::ETAG), Some("\"1\""));
}

#[tokio::test]
async fn create_then_update_round_trip_keeps_identity() {
    let app = app_with(vec![]);

    let created = send(
        &app,
        post_json("/rest/widget", json!({"name": "A", "description": "first"})),
    )
    .await;
    let etag = created.header(header::ETAG).unwrap().to_string();

    let updated = send(
        &app,
        put_json(
            "/rest/widget/1",
            json!({"name": "B", "description": "second"}),
            Some(&etag),
        ),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["id"], created.json()["id"]);

    // 旧 ETag 再次提交即过期
    let replay = send(
        &app,
        put_json(
            "/rest/widget/1",
            json!({"name": "C", "description": "third"}),
            Some(&etag),
        ),
    )
    .await;
    assert_eq!(replay.status, StatusCode::PRECONDITION_FAILED);
}

#[tokio::test]
async fn health_check() {
    let app = app_with(vec![]);

    let resp = send(&app, get("/health")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(&resp.body[..], b"ok");
}
