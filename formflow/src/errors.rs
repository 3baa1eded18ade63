//! Error types for the formflow crate.
//!
//! Field-level validation failures are not errors: they are reported through
//! [`ValidationOutcome::Failure`](crate::validation::ValidationOutcome) and
//! handled inside the form layer. Everything in this module reaches the
//! submission controller's single catch point instead.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// The main error type for formflow operations.
#[derive(Debug, Clone, Error)]
pub enum FormflowError {
    /// The validation schema itself is malformed.
    #[error("{0}")]
    Schema(#[from] SchemaDefinitionError),

    /// A required precondition of a submit action was not met.
    #[error("{0}")]
    Precondition(#[from] PreconditionError),

    /// The outbound request failed.
    #[error("{0}")]
    Request(#[from] RequestError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FormflowError {
    /// Short machine-readable name of the error kind, used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Schema(_) => "schema_definition",
            Self::Precondition(_) => "precondition",
            Self::Request(_) => "request",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Returns true if this error indicates a programming defect rather than
    /// a runtime condition.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Schema(_) | Self::Config(_))
    }
}

impl From<serde_json::Error> for FormflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A malformed validation schema.
///
/// Raised for schema defects such as a cross-field rule pointing at a field
/// the schema never declares. A correct schema never produces one at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaDefinitionError {
    /// A rule references a field that is not declared in the schema.
    #[error("Field '{field}' references undeclared field '{reference}'")]
    UndeclaredReference {
        /// The field owning the rule.
        field: String,
        /// The missing field.
        reference: String,
    },

    /// A rule compares a field with itself.
    #[error("Field '{field}' cannot reference itself")]
    SelfReference {
        /// The field owning the rule.
        field: String,
    },

    /// The same field name was declared twice.
    #[error("Field '{field}' is declared more than once")]
    DuplicateField {
        /// The duplicated field name.
        field: String,
    },

    /// A field was declared with an empty or whitespace-only name.
    #[error("Field name cannot be empty or whitespace-only")]
    EmptyFieldName,

    /// A pattern rule was given an invalid regular expression.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// Why the pattern failed to compile.
        reason: String,
    },
}

impl SchemaDefinitionError {
    /// Creates an undeclared reference error.
    #[must_use]
    pub fn undeclared_reference(field: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::UndeclaredReference {
            field: field.into(),
            reference: reference.into(),
        }
    }

    /// Creates a self reference error.
    #[must_use]
    pub fn self_reference(field: impl Into<String>) -> Self {
        Self::SelfReference {
            field: field.into(),
        }
    }

    /// Creates a duplicate field error.
    #[must_use]
    pub fn duplicate_field(field: impl Into<String>) -> Self {
        Self::DuplicateField {
            field: field.into(),
        }
    }
}

/// A precondition that must hold before a submit action contacts any service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Precondition '{name}' failed: {message}")]
pub struct PreconditionError {
    /// Identifier of the precondition.
    pub name: String,
    /// Diagnostic message. Never shown to the user verbatim.
    pub message: String,
}

impl PreconditionError {
    /// Creates a new precondition error.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The reset token is absent from the navigation query string or empty.
    #[must_use]
    pub fn missing_token() -> Self {
        Self::new("reset_token", "no non-empty 'token' query parameter")
    }
}

/// Errors raised while talking to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a response.
    #[error("Transport error while calling {path}: {message}")]
    Transport {
        /// The request path.
        path: String,
        /// Underlying failure description.
        message: String,
    },

    /// The service answered with a non-2xx status.
    #[error("Request to {path} failed with status {status}")]
    Status {
        /// The request path.
        path: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The submission did not finish within the configured bound.
    #[error("Submission timed out after {timeout_ms}ms")]
    Timeout {
        /// The configured bound in milliseconds.
        timeout_ms: u64,
    },
}

impl RequestError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a status error.
    #[must_use]
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        Self::Status {
            path: path.into(),
            status,
        }
    }

    /// Converts to a dictionary representation for diagnostic logging.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::Transport { path, message } => {
                map.insert("type".to_string(), serde_json::json!("transport"));
                map.insert("path".to_string(), serde_json::json!(path));
                map.insert("cause".to_string(), serde_json::json!(message));
            }
            Self::Status { path, status } => {
                map.insert("type".to_string(), serde_json::json!("status"));
                map.insert("path".to_string(), serde_json::json!(path));
                map.insert("status".to_string(), serde_json::json!(status));
            }
            Self::Timeout { timeout_ms } => {
                map.insert("type".to_string(), serde_json::json!("timeout"));
                map.insert("timeout_ms".to_string(), serde_json::json!(timeout_ms));
            }
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

/// A single field-level validation message.
///
/// Not an error type: it is data carried by a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    /// Flat field name.
    pub path: String,
    /// User-facing message.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
