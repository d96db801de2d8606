//! End-to-end scenarios driven through the public router with a file-backed store, so the
//! persisted JSON document is checked exactly as a restarted process would read it.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use formflow::forms::{
    form_router, FormKind, FormService, Gender, JsonFileStore, SubmissionRepository,
};

const SCENARIO_BODY: &str = "fullname=Jane+Doe&email=j%40d.com&password=Secret1%21&confirmPassword=Secret1%21&gender=f&city=NYC&terms=on";

fn file_backed_router(kind: FormKind, dir: &tempfile::TempDir) -> (Router, Arc<JsonFileStore>) {
    let store = Arc::new(JsonFileStore::open(dir.path().join("submissions.json")));
    let service = Arc::new(FormService::new(kind, store.clone()));
    (form_router(service), store)
}

fn post_form(body: &str) -> Request<Body> {
    Request::post("/submit")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn accepted_registration_is_written_without_password() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (router, store) = file_backed_router(FormKind::StrictRegistration, &dir);
    assert!(store.list().is_empty());

    let response = router
        .oneshot(post_form(SCENARIO_BODY))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Submission Successful"));

    let raw = std::fs::read_to_string(store.path()).expect("file written");
    assert!(!raw.contains("Secret1!"));
    assert!(!raw.contains("password"));

    let document: Value = serde_json::from_str(&raw).expect("json document");
    let records = document.as_array().expect("top-level array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["fullname"], "Jane Doe");
    assert_eq!(records[0]["agreed"], true);
    assert_eq!(records[0]["gender"], "female");
    assert_eq!(records[0]["hobbies"], json!([]));

    let reopened = JsonFileStore::open(store.path());
    let loaded = reopened.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].gender, Gender::Female);
    assert_eq!(loaded[0].city, "NYC");
}

#[tokio::test]
async fn api_reports_submissions_in_acceptance_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (router, _) = file_backed_router(FormKind::StrictRegistration, &dir);

    let empty = router
        .clone()
        .oneshot(Request::get("/api/submissions").body(Body::empty()).expect("request"))
        .await
        .expect("route executes");
    assert_eq!(empty.status(), StatusCode::OK);
    let payload: Value = serde_json::from_str(&body_text(empty).await).expect("json");
    assert_eq!(payload, json!({ "submissions": [] }));

    for name in ["First+Person", "Second+Person"] {
        let body = SCENARIO_BODY.replace("Jane+Doe", name);
        let response = router
            .clone()
            .oneshot(post_form(&body))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let listed = router
        .oneshot(Request::get("/api/submissions").body(Body::empty()).expect("request"))
        .await
        .expect("route executes");
    let payload: Value = serde_json::from_str(&body_text(listed).await).expect("json");
    let names: Vec<_> = payload["submissions"]
        .as_array()
        .expect("submissions array")
        .iter()
        .filter_map(|entry| entry["fullname"].as_str())
        .collect();
    assert_eq!(names, vec!["First Person", "Second Person"]);
}

#[tokio::test]
async fn corrupt_file_is_recovered_as_empty_listing() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("submissions.json"), "[{ broken").expect("seed file");
    let (router, _) = file_backed_router(FormKind::Registration, &dir);

    let response = router
        .oneshot(Request::get("/submissions").body(Body::empty()).expect("request"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No submissions yet."));
}
