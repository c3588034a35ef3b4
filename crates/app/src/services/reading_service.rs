//! Reading service — use-cases for the intake workflow.

use voltlog_domain::error::VoltlogError;
use voltlog_domain::reading::Reading;

use crate::ports::ReadingStore;

/// Application service for submitting and listing readings.
pub struct ReadingService<S> {
    store: S,
}

impl<S: ReadingStore> ReadingService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate a raw form submission and append the resulting reading.
    ///
    /// The store is only touched when validation succeeds; a rejected
    /// submission leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`VoltlogError::Validation`] when the submission is invalid,
    /// or a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn submit_reading(
        &self,
        device_name: &str,
        voltage_raw: &str,
        date: &str,
    ) -> Result<Reading, VoltlogError> {
        let reading = Reading::from_submission(device_name, voltage_raw, date)?;
        self.store.append(reading).await
    }

    /// List all accepted readings in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_readings(&self) -> Result<Vec<Reading>, VoltlogError> {
        self.store.get_all().await
    }
}
