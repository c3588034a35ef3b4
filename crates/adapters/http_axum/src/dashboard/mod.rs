//! Server-side rendered HTML pages (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod readings;

use axum::Router;
use axum::routing::post;

use voltlog_app::ports::ReadingStore;

use crate::state::AppState;

/// Build the page sub-router for the intake form.
///
/// `POST /` handles form submissions. Every other method falls back to the
/// rendered index page, so GET, HEAD, PUT, … all show the current state.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ReadingStore + Send + Sync + 'static,
{
    Router::new().route(
        "/",
        post(readings::submit::<S>).fallback(readings::index::<S>),
    )
}
