//! Web front end for submitting tasks to the tracker.
//!
//! # Overview
//! One page: `GET /` renders the task-entry form, `POST /` takes the
//! form-encoded submission, translates it through `tasktrack_core`, and
//! forwards the result to the tracker's `POST /task` endpoint.
//!
//! # Design
//! - Success re-renders the same empty form; any failure returns the error's
//!   `Display` text as a plain-text body. Both come back with status 200,
//!   which is the behavior existing callers depend on (see DESIGN.md).
//! - The outbound call is blocking (ureq), so the handler runs it under
//!   `spawn_blocking`. One call per submission, no retries.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use chrono_tz::Tz;
use tasktrack_core::{TaskForm, TrackerClient, TranslateError};
use tokio::net::TcpListener;

pub mod submit;

const INPUT_TASK_HTML: &str = include_str!("../templates/input_task.html");

/// Shared per-process state. Nothing here is mutable; concurrent submissions
/// are independent.
pub struct AppState {
    pub client: TrackerClient,
    /// Zone used to turn the form's date and time into epoch seconds.
    pub tz: Tz,
    pub agent: ureq::Agent,
}

pub type SharedState = Arc<AppState>;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(show_form).post(create_task))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: SharedState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn show_form() -> Html<&'static str> {
    Html(INPUT_TASK_HTML)
}

async fn create_task(State(state): State<SharedState>, Form(form): Form<TaskForm>) -> Response {
    tracing::debug!(?form, "incoming task form");
    let task_name = form.task_name.clone();
    match add_task(&state, form).await {
        Ok(()) => {
            tracing::info!(task_name = %task_name, "task created");
            Html(INPUT_TASK_HTML).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "task submission failed");
            err.to_string().into_response()
        }
    }
}

/// The translate-submit-parse pipeline for one form submission.
async fn add_task(state: &SharedState, form: TaskForm) -> Result<(), TranslateError> {
    let req = state.client.build_create_task(&form, &state.tz)?;

    let agent = state.agent.clone();
    let response = tokio::task::spawn_blocking(move || submit::execute(&agent, req))
        .await
        .map_err(|e| TranslateError::RemoteTaskCreationFailed(e.to_string()))??;

    state.client.parse_create_task(response)
}
