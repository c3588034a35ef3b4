//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use voltlog_domain::error::VoltlogError;

/// Maps [`VoltlogError`] to an HTTP response with appropriate status code.
///
/// Validation failures are normally handled inline by the form handler
/// (re-rendered page); this mapping only sees them if a handler propagates
/// one directly.
pub struct PageError(VoltlogError);

impl From<VoltlogError> for PageError {
    fn from(err: VoltlogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            VoltlogError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            VoltlogError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
