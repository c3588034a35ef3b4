//! Intake form page — submission handling and rendering.

use askama::Template;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use voltlog_app::ports::ReadingStore;
use voltlog_domain::error::VoltlogError;
use voltlog_domain::reading::Reading;

use crate::error::PageError;
use crate::state::AppState;

/// Echo of the user's text fields, re-populated after a validation failure.
///
/// The voltage field is deliberately absent: it is only consumed by
/// validation and never echoed back as typed text.
#[derive(Debug, Default)]
pub struct PendingInput {
    pub device_name: String,
    pub date: String,
}

/// Index page template: the intake form plus all accepted readings.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    error: Option<String>,
    form: PendingInput,
    readings: Vec<Reading>,
}

impl IntoResponse for IndexTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "template rendering failed",
                )
                    .into_response()
            }
        }
    }
}

/// Form fields for a reading submission.
///
/// Missing fields deserialize to empty strings, matching how a browser
/// submits an untouched input.
#[derive(Debug, Deserialize)]
pub struct ReadingForm {
    #[serde(rename = "deviceName", default)]
    pub device_name: String,
    #[serde(default)]
    pub voltage: String,
    #[serde(default)]
    pub date: String,
}

/// `GET /` (and any non-POST method) — render the form and all readings.
pub async fn index<S>(State(state): State<AppState<S>>) -> Result<IndexTemplate, PageError>
where
    S: ReadingStore + Send + Sync + 'static,
{
    let readings = state.reading_service.list_readings().await?;

    Ok(IndexTemplate {
        error: None,
        form: PendingInput::default(),
        readings,
    })
}

/// Response from the submission handler (PRG pattern).
pub enum SubmitResponse {
    /// Redirect back to the index page after a stored submission.
    Redirect(Redirect),
    /// Re-rendered page carrying the validation message and echoed input.
    Invalid(IndexTemplate),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Invalid(page) => page.into_response(),
        }
    }
}

/// `POST /` — validate the submission; append + redirect, or re-render.
///
/// The redirect terminates the request without rendering, so refreshing the
/// browser after a successful submission cannot resubmit the form.
pub async fn submit<S>(
    State(state): State<AppState<S>>,
    Form(form): Form<ReadingForm>,
) -> Result<SubmitResponse, PageError>
where
    S: ReadingStore + Send + Sync + 'static,
{
    let submitted = state
        .reading_service
        .submit_reading(&form.device_name, &form.voltage, &form.date)
        .await;

    match submitted {
        Ok(_) => Ok(SubmitResponse::Redirect(Redirect::to("/"))),
        Err(VoltlogError::Validation(err)) => {
            tracing::debug!(error = %err, "submission rejected");
            let readings = state.reading_service.list_readings().await?;
            Ok(SubmitResponse::Invalid(IndexTemplate {
                error: Some(err.to_string()),
                form: PendingInput {
                    device_name: form.device_name,
                    date: form.date,
                },
                readings,
            }))
        }
        Err(err) => Err(PageError::from(err)),
    }
}
