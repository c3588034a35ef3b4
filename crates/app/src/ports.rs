//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

use std::future::Future;

use voltlog_domain::error::VoltlogError;
use voltlog_domain::reading::Reading;

/// Append-only storage for accepted readings.
///
/// Implementations must preserve insertion order: `get_all` returns
/// readings in the order they were appended. There are no update or delete
/// operations.
pub trait ReadingStore {
    /// Append a reading to the store.
    fn append(
        &self,
        reading: Reading,
    ) -> impl Future<Output = Result<Reading, VoltlogError>> + Send;

    /// Return all stored readings in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Reading>, VoltlogError>> + Send;
}

impl<T: ReadingStore + Send + Sync> ReadingStore for std::sync::Arc<T> {
    fn append(
        &self,
        reading: Reading,
    ) -> impl Future<Output = Result<Reading, VoltlogError>> + Send {
        (**self).append(reading)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Reading>, VoltlogError>> + Send {
        (**self).get_all()
    }
}
