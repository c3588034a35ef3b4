//! In-memory reading store backed by a mutex-guarded `Vec`.

use std::future::Future;
use std::sync::Mutex;

use voltlog_domain::error::{StorageError, VoltlogError};
use voltlog_domain::reading::Reading;

use crate::ports::ReadingStore;

/// Process-lifetime reading store.
///
/// Starts empty and loses its contents on shutdown — there is no
/// durability. The `Vec` sits behind a `Mutex` so concurrent submissions
/// cannot interleave appends; critical sections are a single push or clone
/// and are never held across an await point.
#[derive(Debug, Default)]
pub struct InMemoryReadingStore {
    readings: Mutex<Vec<Reading>>,
}

impl InMemoryReadingStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadingStore for InMemoryReadingStore {
    fn append(
        &self,
        reading: Reading,
    ) -> impl Future<Output = Result<Reading, VoltlogError>> + Send {
        let result = match self.readings.lock() {
            Ok(mut readings) => {
                readings.push(reading.clone());
                Ok(reading)
            }
            Err(_) => Err(StorageError::Poisoned.into()),
        };
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Reading>, VoltlogError>> + Send {
        let result = match self.readings.lock() {
            Ok(readings) => Ok(readings.clone()),
            Err(_) => Err(StorageError::Poisoned.into()),
        };
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(device_name: &str, voltage: i64) -> Reading {
        Reading::builder()
            .device_name(device_name)
            .voltage(voltage)
            .date("2024-01-01")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_start_empty() {
        let store = InMemoryReadingStore::new();
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_appended_reading() {
        let store = InMemoryReadingStore::new();
        let appended = store.append(reading("Sensor1", 12)).await.unwrap();
        assert_eq!(appended.device_name, "Sensor1");

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], appended);
    }

    #[tokio::test]
    async fn should_preserve_insertion_order() {
        let store = InMemoryReadingStore::new();
        store.append(reading("Sensor1", 12)).await.unwrap();
        store.append(reading("Sensor2", 5)).await.unwrap();
        store.append(reading("Sensor3", 230)).await.unwrap();

        let all = store.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|r| r.device_name.as_str()).collect();
        assert_eq!(names, ["Sensor1", "Sensor2", "Sensor3"]);
    }

    #[tokio::test]
    async fn should_not_share_snapshot_with_store() {
        let store = InMemoryReadingStore::new();
        store.append(reading("Sensor1", 12)).await.unwrap();

        let mut snapshot = store.get_all().await.unwrap();
        snapshot.clear();

        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }
}
