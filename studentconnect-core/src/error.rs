//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// User-facing validation failures.
///
/// The `Display` text of each variant is the notice shown to the user; the
/// action that triggered it is aborted.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "details")]
pub enum ValidationError {
    /// One or more required fields are empty (after trimming)
    #[error("Please fill in all required fields.")]
    RequiredFieldsMissing(Vec<String>),

    /// Password confirmation differs from the password
    #[error("Passwords do not match. Please check and try again.")]
    PasswordMismatch,

    /// Password shorter than the minimum length
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    /// Event date earlier than today
    #[error("Event date cannot be in the past.")]
    DateInPast,

    /// Date input not in `YYYY-MM-DD` form
    #[error("Please enter a valid date (YYYY-MM-DD).")]
    InvalidDate(String),

    /// Time input not in `HH:MM` form
    #[error("Please enter a valid time (HH:MM).")]
    InvalidTime(String),

    /// Selected file is not an image
    #[error("Please select a valid image file.")]
    NotAnImage { media_type: String },
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A layout names a view that is not registered
    #[error("View not registered: {0}")]
    ViewNotRegistered(String),

    /// The same view id was registered twice
    #[error("Duplicate view: {0}")]
    DuplicateView(String),

    /// A step sequence needs at least one step
    #[error("Form has no steps")]
    EmptyStepSequence,

    /// A form field was declared on a step that does not exist
    #[error("Field {field} refers to missing step {step}")]
    FieldStepOutOfRange { field: String, step: usize },

    /// No catalog details for the requested event
    #[error("Details for this event are not available yet.")]
    EventDetailsUnavailable(String),

    /// Validation error (blocking notice)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Intent store / config storage error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Reading a selected file failed
    #[error("File read error: {0}")]
    FileReadError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Header value could not be encoded
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, unknown event, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EventDetailsUnavailable(_))
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_notices_match_dashboard_wording() {
        assert_eq!(
            ValidationError::RequiredFieldsMissing(vec!["title".into()]).to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::PasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters long."
        );
        assert_eq!(
            CoreError::from(ValidationError::DateInPast).to_string(),
            "Event date cannot be in the past."
        );
    }

    #[test]
    fn expected_errors_are_user_facing_only() {
        assert!(CoreError::from(ValidationError::PasswordMismatch).is_expected());
        assert!(CoreError::EventDetailsUnavailable("x".into()).is_expected());
        assert!(!CoreError::StorageError("disk".into()).is_expected());
        assert!(!CoreError::EmptyStepSequence.is_expected());
    }
}
