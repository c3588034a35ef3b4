//! Reading — one accepted device/voltage/date measurement.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, VoltlogError};

/// A single accepted voltage measurement.
///
/// Readings are append-only: once accepted they are never mutated or
/// deleted. Invariants: `device_name` and `date` are non-empty and
/// `voltage` is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub device_name: String,
    pub voltage: i64,
    pub date: String,
}

impl Reading {
    /// Create a builder for constructing a [`Reading`].
    #[must_use]
    pub fn builder() -> ReadingBuilder {
        ReadingBuilder::default()
    }

    /// Parse a raw form submission into a validated [`Reading`].
    ///
    /// The presence check runs strictly before the numeric check: when any
    /// field is empty the voltage text is not inspected at all, so an
    /// empty-and-invalid submission reports the missing fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] when any field is empty,
    /// or [`ValidationError::NonPositiveVoltage`] when the voltage does not
    /// parse as an integer or is not strictly positive.
    pub fn from_submission(
        device_name: &str,
        voltage_raw: &str,
        date: &str,
    ) -> Result<Self, VoltlogError> {
        if device_name.is_empty() || voltage_raw.is_empty() || date.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }

        let voltage: i64 = voltage_raw
            .parse()
            .map_err(|_| ValidationError::NonPositiveVoltage)?;

        Self::builder()
            .device_name(device_name)
            .voltage(voltage)
            .date(date)
            .build()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`VoltlogError::Validation`] when `device_name` or `date`
    /// is empty, or when `voltage` is not strictly positive.
    pub fn validate(&self) -> Result<(), VoltlogError> {
        if self.device_name.is_empty() || self.date.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        if self.voltage <= 0 {
            return Err(ValidationError::NonPositiveVoltage.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Reading`].
#[derive(Debug, Default)]
pub struct ReadingBuilder {
    device_name: Option<String>,
    voltage: Option<i64>,
    date: Option<String>,
}

impl ReadingBuilder {
    #[must_use]
    pub fn device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    #[must_use]
    pub fn voltage(mut self, voltage: i64) -> Self {
        self.voltage = Some(voltage);
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Consume the builder, validate, and return a [`Reading`].
    ///
    /// # Errors
    ///
    /// Returns [`VoltlogError::Validation`] if any field is missing or
    /// violates an invariant.
    pub fn build(self) -> Result<Reading, VoltlogError> {
        let reading = Reading {
            device_name: self.device_name.unwrap_or_default(),
            voltage: self.voltage.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
        };
        reading.validate()?;
        Ok(reading)
    }
}
