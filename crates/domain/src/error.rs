//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! The `Display` output of the validation variants is the literal message
//! shown to the user on the re-rendered form, so changing it is a
//! user-visible change.

/// Top-level error for all voltlog operations.
#[derive(Debug, thiserror::Error)]
pub enum VoltlogError {
    /// A submission failed validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The reading store failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Validation failures for a reading submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more form fields were left empty.
    #[error("all fields are required")]
    MissingFields,

    /// The voltage field did not parse as a strictly positive integer.
    #[error("voltage must be a positive number")]
    NonPositiveVoltage,
}

/// Failures raised by a reading store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store lock was poisoned by a panicking thread.
    #[error("reading store lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_literal_form_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "all fields are required"
        );
        assert_eq!(
            ValidationError::NonPositiveVoltage.to_string(),
            "voltage must be a positive number"
        );
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: VoltlogError = ValidationError::MissingFields.into();
        assert!(matches!(
            err,
            VoltlogError::Validation(ValidationError::MissingFields)
        ));
    }

    #[test]
    fn should_convert_storage_error_into_top_level_error() {
        let err: VoltlogError = StorageError::Poisoned.into();
        assert!(matches!(err, VoltlogError::Storage(_)));
    }
}
