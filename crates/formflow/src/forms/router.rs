use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;

use super::domain::Submission;
use super::fields::RawFields;
use super::service::{FormService, SubmitOutcome};
use super::store::SubmissionRepository;
use crate::error::AppError;
use crate::render::{render, Page};

/// Router builder exposing the form, submit, and listing endpoints for one variant.
pub fn form_router<S>(service: Arc<FormService<S>>) -> Router
where
    S: SubmissionRepository + 'static,
{
    let kind = service.kind();
    let mut router = Router::new()
        .route("/", get(form_handler::<S>))
        .route("/submit", post(submit_handler::<S>))
        .route("/api/rules", get(rules_handler::<S>));

    if kind.lists_submissions() {
        router = router.route("/submissions", get(list_handler::<S>));
    }
    if kind.exposes_submission_api() {
        router = router.route("/api/submissions", get(api_list_handler::<S>));
    }

    router.fallback(not_found).with_state(service)
}

pub(crate) async fn form_handler<S>(State(service): State<Arc<FormService<S>>>) -> Html<String>
where
    S: SubmissionRepository + 'static,
{
    let state = service.blank_form();
    Html(render(&Page::Form {
        kind: service.kind(),
        state: &state,
    }))
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError>
where
    S: SubmissionRepository + 'static,
{
    let fields = RawFields::from(pairs);
    let worker = Arc::clone(&service);
    let outcome = tokio::task::spawn_blocking(move || worker.submit(fields)).await??;

    let response = match outcome {
        SubmitOutcome::Rejected(state) => {
            let page = Page::Form {
                kind: service.kind(),
                state: &state,
            };
            (StatusCode::BAD_REQUEST, Html(render(&page))).into_response()
        }
        SubmitOutcome::Registered(submission) => {
            Html(render(&Page::RegistrationSuccess(&submission))).into_response()
        }
        SubmitOutcome::Contacted(message) => {
            Html(render(&Page::ContactResult(&message))).into_response()
        }
    };
    Ok(response)
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<FormService<S>>>,
) -> Result<Html<String>, AppError>
where
    S: SubmissionRepository + 'static,
{
    let submissions = read_submissions(service).await?;
    Ok(Html(render(&Page::SubmissionList(&submissions))))
}

pub(crate) async fn api_list_handler<S>(
    State(service): State<Arc<FormService<S>>>,
) -> Result<Json<serde_json::Value>, AppError>
where
    S: SubmissionRepository + 'static,
{
    let submissions = read_submissions(service).await?;
    Ok(Json(json!({ "submissions": submissions })))
}

/// The store reads the file synchronously, so keep it off the async workers.
async fn read_submissions<S>(service: Arc<FormService<S>>) -> Result<Vec<Submission>, AppError>
where
    S: SubmissionRepository + 'static,
{
    Ok(tokio::task::spawn_blocking(move || service.submissions()).await?)
}

pub(crate) async fn rules_handler<S>(
    State(service): State<Arc<FormService<S>>>,
) -> Json<serde_json::Value>
where
    S: SubmissionRepository + 'static,
{
    Json(json!({
        "form": service.kind(),
        "rules": service.validator().rules(),
    }))
}

pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
