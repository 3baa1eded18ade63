//! Validation rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::SchemaDefinitionError;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A single constraint on one field.
///
/// Every rule carries the user-facing message reported when it fails.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The value must be present and non-empty.
    Required {
        /// Failure message.
        message: String,
    },
    /// The value must have at least `min` characters.
    MinLength {
        /// Minimum character count.
        min: usize,
        /// Failure message.
        message: String,
    },
    /// The value must have at most `max` characters.
    MaxLength {
        /// Maximum character count.
        max: usize,
        /// Failure message.
        message: String,
    },
    /// A non-empty value must look like an email address.
    Email {
        /// Failure message.
        message: String,
    },
    /// A non-empty value must match a regular expression.
    Pattern {
        /// Compiled expression.
        regex: Regex,
        /// Failure message.
        message: String,
    },
    /// The value must equal the current value of another field.
    EqualsField {
        /// The referenced field name.
        reference: String,
        /// Failure message.
        message: String,
    },
}

impl Rule {
    /// Creates a required rule.
    #[must_use]
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    /// Creates a minimum length rule.
    #[must_use]
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    /// Creates a maximum length rule.
    #[must_use]
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength {
            max,
            message: message.into(),
        }
    }

    /// Creates an email format rule.
    #[must_use]
    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    /// Creates a pattern rule, compiling `pattern`.
    pub fn pattern(
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, SchemaDefinitionError> {
        let regex = Regex::new(pattern).map_err(|e| SchemaDefinitionError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::Pattern {
            regex,
            message: message.into(),
        })
    }

    /// Creates a cross-field equality rule.
    #[must_use]
    pub fn equals_field(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EqualsField {
            reference: reference.into(),
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Required { message }
            | Self::MinLength { message, .. }
            | Self::MaxLength { message, .. }
            | Self::Email { message }
            | Self::Pattern { message, .. }
            | Self::EqualsField { message, .. } => message,
        }
    }

    /// Returns the field this rule depends on, for cross-field rules.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::EqualsField { reference, .. } => Some(reference),
            _ => None,
        }
    }

    /// Returns a short name for the rule kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::MinLength { .. } => "min_length",
            Self::MaxLength { .. } => "max_length",
            Self::Email { .. } => "email",
            Self::Pattern { .. } => "pattern",
            Self::EqualsField { .. } => "equals_field",
        }
    }

    /// Evaluates the rule.
    ///
    /// `value` is `None` when the field is absent from the snapshot; only
    /// `Required` fails on an absent value. `lookup` resolves other fields'
    /// current values for cross-field rules.
    pub(crate) fn passes<'a>(
        &self,
        value: Option<&str>,
        lookup: impl Fn(&str) -> Option<&'a str>,
    ) -> bool {
        let Some(value) = value else {
            return !matches!(self, Self::Required { .. });
        };

        match self {
            Self::Required { .. } => !value.is_empty(),
            Self::MinLength { min, .. } => value.chars().count() >= *min,
            Self::MaxLength { max, .. } => value.chars().count() <= *max,
            Self::Email { .. } => value.is_empty() || EMAIL_PATTERN.is_match(value),
            Self::Pattern { regex, .. } => value.is_empty() || regex.is_match(value),
            Self::EqualsField { reference, .. } => lookup(reference) == Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none(_: &str) -> Option<&'static str> {
        None
    }

    #[test]
    fn test_required() {
        let rule = Rule::required("Password required");
        assert!(rule.passes(Some("abc"), none));
        assert!(!rule.passes(Some(""), none));
        assert!(!rule.passes(None, none));
    }

    #[test]
    fn test_absent_value_skips_other_rules() {
        assert!(Rule::min_length(6, "short").passes(None, none));
        assert!(Rule::equals_field("password", "mismatch").passes(None, none));
    }

    #[test]
    fn test_lengths_count_chars() {
        assert!(Rule::min_length(3, "short").passes(Some("ção"), none));
        assert!(!Rule::max_length(2, "long").passes(Some("ção"), none));
    }

    #[test]
    fn test_email() {
        let rule = Rule::email("Invalid email");
        assert!(rule.passes(Some("user@example.com"), none));
        assert!(rule.passes(Some(""), none));
        assert!(!rule.passes(Some("user@"), none));
    }

    #[test]
    fn test_pattern() {
        let rule = Rule::pattern(r"^\d+$", "Digits only").unwrap();
        assert!(rule.passes(Some("123"), none));
        assert!(!rule.passes(Some("12a"), none));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Rule::pattern("(", "never").unwrap_err();
        assert!(matches!(err, SchemaDefinitionError::InvalidPattern { .. }));
    }

    #[test]
    fn test_equals_field_reads_lookup() {
        let rule = Rule::equals_field("password", "Confirmation does not match");
        assert!(rule.passes(Some("abc"), |_| Some("abc")));
        assert!(!rule.passes(Some("abc"), |_| Some("abd")));
        assert!(!rule.passes(Some("abc"), none));
        assert_eq!(rule.reference(), Some("password"));
    }
}
