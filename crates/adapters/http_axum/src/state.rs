//! Shared application state for axum handlers.

use std::sync::Arc;

use voltlog_app::ports::ReadingStore;
use voltlog_app::services::reading_service::ReadingService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying store does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Reading intake service.
    pub reading_service: Arc<ReadingService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            reading_service: Arc::clone(&self.reading_service),
        }
    }
}

impl<S> AppState<S>
where
    S: ReadingStore + Send + Sync + 'static,
{
    /// Create a new application state from the reading service.
    pub fn new(reading_service: ReadingService<S>) -> Self {
        Self {
            reading_service: Arc::new(reading_service),
        }
    }
}
