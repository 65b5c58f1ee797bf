//! HTTP-level tests for the names REST API.
//!
//! Requests are driven straight through the axum `Router` with `tower::ServiceExt::oneshot`; no
//! socket is bound.

use std::sync::Arc;

use api_rest::build_router;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use names_core::recognizer::{
    EntitySpan, FixedRecognizer, HeuristicRecognizer, Recognizer, RecognizerError,
    RecognizerResult,
};
use names_core::NameService;
use tempfile::TempDir;
use tower::ServiceExt;

struct FailingRecognizer;

impl Recognizer for FailingRecognizer {
    fn recognize(&self, _text: &str) -> RecognizerResult<Vec<EntitySpan>> {
        Err(RecognizerError::Status(503))
    }
}

/// Static dir holding the three front-end assets.
fn static_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>names</html>").unwrap();
    std::fs::write(dir.path().join("style_guide_data.js"), "const STYLE = {};").unwrap();
    std::fs::write(dir.path().join("guardian_style_guide.md"), "# Style guide").unwrap();
    dir
}

fn app(service: NameService, dir: &TempDir) -> axum::Router {
    build_router(service, dir.path())
}

fn heuristic_app(dir: &TempDir) -> axum::Router {
    app(NameService::new(Arc::new(HeuristicRecognizer::new())), dir)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/extract-names")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_extract_names_title_and_repeats() {
    let dir = static_dir();
    let resp = heuristic_app(&dir)
        .oneshot(post_json(
            r#"{"text": "Prince Philip met John Smith. later John Smith left."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({
            "names": [
                {"name": "Prince Philip", "positions": [{"start": 0, "end": 13}]},
                {"name": "John Smith", "positions": [
                    {"start": 18, "end": 28},
                    {"start": 36, "end": 46}
                ]}
            ]
        })
    );
}

#[tokio::test]
async fn test_extract_names_with_replayed_entities() {
    let dir = static_dir();
    let fixed = FixedRecognizer::new(vec![
        EntitySpan::new("Mountbatten-Windsor\u{2019}s", "ORG_LIKE", 0, 21),
        EntitySpan::new("Acme", "ORG", 32, 36),
    ]);
    let resp = app(NameService::new(Arc::new(fixed)), &dir)
        .oneshot(post_json(
            r#"{"text": "Mountbatten-Windsor’s legacy at Acme"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({
            "names": [{"name": "Mountbatten-Windsor", "positions": [{"start": 0, "end": 21}]}]
        })
    );
}

#[tokio::test]
async fn test_blank_or_missing_text_returns_empty_names() {
    let dir = static_dir();
    let fixed = Arc::new(FixedRecognizer::new(vec![EntitySpan::new(
        "Ada", "PERSON", 0, 3,
    )]));
    let router = app(NameService::new(fixed.clone()), &dir);

    for body in [r#"{}"#, r#"{"text": ""}"#, r#"{"text": "   "}"#, r#"{"text": null}"#] {
        let resp = router.clone().oneshot(post_json(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, serde_json::json!({"names": []}));
    }

    assert_eq!(fixed.calls(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let dir = static_dir();
    let router = heuristic_app(&dir);

    let resp = router.clone().oneshot(post_json("{not json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = router
        .clone()
        .oneshot(post_json(r#"{"text": 42}"#))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());

    let resp = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/extract-names")
                .body(Body::from("Prince Philip"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_recognizer_failure_is_server_error() {
    let dir = static_dir();
    let resp = app(NameService::new(Arc::new(FailingRecognizer)), &dir)
        .oneshot(post_json(r#"{"text": "Ada Lovelace"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health_reports_recognizer() {
    let dir = static_dir();
    let resp = heuristic_app(&dir).oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["recognizer"], "heuristic");
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let dir = static_dir();
    let router = heuristic_app(&dir);

    let resp = router.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "<html>names</html>");

    let resp = router
        .clone()
        .oneshot(get("/style_guide_data.js"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "const STYLE = {};");

    let resp = router
        .oneshot(get("/guardian_style_guide.md"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "# Style guide");
}

#[tokio::test]
async fn test_missing_static_asset_is_not_found() {
    let dir = TempDir::new().unwrap();
    let resp = heuristic_app(&dir).oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let dir = static_dir();
    let mut req = post_json(r#"{"text": "Ada Lovelace"}"#);
    req.headers_mut()
        .insert(header::ORIGIN, "http://localhost:8080".parse().unwrap());

    let resp = heuristic_app(&dir).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_openapi_document_lists_extract_names() {
    let dir = static_dir();
    let resp = heuristic_app(&dir)
        .oneshot(get("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"]["/extract-names"]["post"].is_object());
    assert!(doc["paths"]["/health"]["get"].is_object());
}
