//! Validation outcome types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::FieldValidationError;
use crate::fields::FormData;

/// Field error messages keyed by flat field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message for a field, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    /// Inserts or replaces a message.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(path.into(), message.into());
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(path, message);
        self
    }

    /// Returns true if the field has a message.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    /// Returns the number of fields with a message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over `(path, message)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the field names carrying a message.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.errors.keys().cloned().collect()
    }
}

impl FromIterator<FieldValidationError> for FieldErrors {
    /// Keeps the first message seen for each path.
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut errors = BTreeMap::new();
        for error in iter {
            errors.entry(error.path).or_insert(error.message);
        }
        Self { errors }
    }
}

/// Result of evaluating a schema against a data snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every rule passed; carries the validated data.
    Success(FormData),
    /// At least one rule failed; errors in schema declaration order.
    Failure(Vec<FieldValidationError>),
}

impl ValidationOutcome {
    /// Returns true if validation passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if validation failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the ordered failure list (empty on success).
    #[must_use]
    pub fn errors(&self) -> &[FieldValidationError] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors,
        }
    }

    /// Collapses the failure list into one message per field.
    #[must_use]
    pub fn error_map(&self) -> FieldErrors {
        self.errors().iter().cloned().collect()
    }

    /// Returns the validated data on success.
    #[must_use]
    pub fn into_data(self) -> Option<FormData> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }
}
