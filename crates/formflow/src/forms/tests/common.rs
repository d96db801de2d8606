use std::path::PathBuf;
use std::sync::Arc;

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::forms::store::{StoreError, SubmissionRepository};
use crate::forms::{
    form_router, FormKind, FormService, Gender, InMemoryStore, RawFields, Submission,
};

pub(super) fn contact_fields() -> RawFields {
    RawFields::from_pairs([
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("message", "Hello there, engine fans"),
    ])
}

pub(super) fn registration_fields() -> RawFields {
    registration_with("", None)
}

/// Same fields with one key replaced or removed.
pub(super) fn registration_with(field: &str, value: Option<&str>) -> RawFields {
    let mut fields = RawFields::new();
    for (key, original) in [
        ("fullname", "Jane Doe"),
        ("email", "j@d.com"),
        ("password", "Secret1!"),
        ("confirmPassword", "Secret1!"),
        ("gender", "f"),
        ("city", "NYC"),
        ("terms", "on"),
    ] {
        if key == field {
            if let Some(replacement) = value {
                fields.push(key, replacement);
            }
        } else {
            fields.push(key, original);
        }
    }
    fields
}

pub(super) fn registration_body() -> &'static str {
    "fullname=Jane+Doe&email=j%40d.com&password=Secret1%21&confirmPassword=Secret1%21&gender=f&city=NYC&terms=on"
}

pub(super) fn submission(name: &str, minute: u32) -> Submission {
    Submission {
        fullname: name.to_string(),
        email: format!("{}@example.com", name.to_ascii_lowercase().replace(' ', ".")),
        gender: Gender::Other,
        hobbies: vec!["Reading".to_string()],
        city: "Seattle".to_string(),
        agreed: true,
        submitted_at: Utc
            .with_ymd_and_hms(2025, 10, 1, 9, minute, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) fn memory_service(kind: FormKind) -> (Arc<FormService<InMemoryStore>>, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    let service = Arc::new(FormService::new(kind, store.clone()));
    (service, store)
}

pub(super) fn memory_router(kind: FormKind) -> (axum::Router, Arc<InMemoryStore>) {
    let (service, store) = memory_service(kind);
    (form_router(service), store)
}

pub(super) fn scratch_file(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("submissions.json")
}

pub(super) struct ReadOnlyStore;

impl SubmissionRepository for ReadOnlyStore {
    fn load(&self) -> Vec<Submission> {
        Vec::new()
    }

    fn append(&self, _submission: Submission) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("/read-only/submissions.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read only"),
        })
    }

    fn list(&self) -> Vec<Submission> {
        Vec::new()
    }
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
