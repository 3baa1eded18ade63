//! Submission results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::FormflowError;
use crate::validation::FieldErrors;

/// The outcome of one submit trigger.
#[derive(Debug, Clone)]
pub enum SubmissionResult {
    /// Validation passed and the bound action completed.
    Success,
    /// Validation failed; the errors were distributed to the fields and no
    /// request was made.
    ValidationRejected(FieldErrors),
    /// The cycle failed after validation, or the schema is malformed.
    RequestFailed(FormflowError),
    /// A cycle was already in progress, so the trigger was dropped.
    Ignored,
}

impl SubmissionResult {
    /// Returns true if the bound action completed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if validation rejected the data.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::ValidationRejected(_))
    }

    /// Returns true if the cycle failed after validation.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }

    /// Returns true if the trigger was dropped by the in-flight guard.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Returns the field errors of a rejected cycle.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ValidationRejected(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns the cause of a failed cycle.
    #[must_use]
    pub fn cause(&self) -> Option<&FormflowError> {
        match self {
            Self::RequestFailed(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the payload-free status.
    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        match self {
            Self::Success => SubmissionStatus::Success,
            Self::ValidationRejected(_) => SubmissionStatus::ValidationRejected,
            Self::RequestFailed(_) => SubmissionStatus::RequestFailed,
            Self::Ignored => SubmissionStatus::Ignored,
        }
    }
}

/// Payload-free summary of a [`SubmissionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// See [`SubmissionResult::Success`].
    Success,
    /// See [`SubmissionResult::ValidationRejected`].
    ValidationRejected,
    /// See [`SubmissionResult::RequestFailed`].
    RequestFailed,
    /// See [`SubmissionResult::Ignored`].
    Ignored,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ValidationRejected => write!(f, "validation_rejected"),
            Self::RequestFailed => write!(f, "request_failed"),
            Self::Ignored => write!(f, "ignored"),
        }
    }
}
