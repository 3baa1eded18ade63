//! Validation schemas.

use std::collections::HashSet;

use super::engine;
use super::outcome::ValidationOutcome;
use super::rules::Rule;
use crate::errors::SchemaDefinitionError;
use crate::fields::FormData;

/// The rules declared for one field, evaluated in declaration order.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: String,
    rules: Vec<Rule>,
    defect: Option<SchemaDefinitionError>,
}

impl FieldSchema {
    /// Declares a string field with no rules.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            defect: None,
        }
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Requires a non-empty value.
    #[must_use]
    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(Rule::required(message))
    }

    /// Requires at least `min` characters.
    #[must_use]
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::min_length(min, message))
    }

    /// Allows at most `max` characters.
    #[must_use]
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::max_length(max, message))
    }

    /// Requires an email-shaped value.
    #[must_use]
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Rule::email(message))
    }

    /// Requires the value to match `pattern`.
    ///
    /// An invalid pattern is recorded and reported by
    /// [`ValidationSchema::check`].
    #[must_use]
    pub fn matches(mut self, pattern: &str, message: impl Into<String>) -> Self {
        match Rule::pattern(pattern, message) {
            Ok(rule) => self.rules.push(rule),
            Err(err) => {
                self.defect.get_or_insert(err);
            }
        }
        self
    }

    /// Requires the value to equal the current value of `reference`.
    #[must_use]
    pub fn equals_field(self, reference: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(Rule::equals_field(reference, message))
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared rules.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// A flat, composable rule set keyed by field name.
///
/// # Example
///
/// ```rust
/// use formflow::validation::{FieldSchema, ValidationSchema};
///
/// let schema = ValidationSchema::new()
///     .field(FieldSchema::string("password").required("Password required"))
///     .field(
///         FieldSchema::string("password_confirmation")
///             .equals_field("password", "Confirmation does not match"),
///     );
/// assert!(schema.check().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    fields: Vec<FieldSchema>,
}

impl ValidationSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    #[must_use]
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Merges another schema's fields after this one's.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.fields.extend(other.fields);
        self
    }

    /// Returns the declared fields in order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Returns the declared field names in order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldSchema::name).collect()
    }

    /// Returns the declaration for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Checks the schema for definition defects.
    ///
    /// Rejects empty or duplicate field names, invalid patterns, and
    /// cross-field rules referencing the field itself or an undeclared
    /// field.
    pub fn check(&self) -> Result<(), SchemaDefinitionError> {
        let mut declared = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(SchemaDefinitionError::EmptyFieldName);
            }
            if !declared.insert(field.name.as_str()) {
                return Err(SchemaDefinitionError::duplicate_field(&field.name));
            }
            if let Some(defect) = &field.defect {
                return Err(defect.clone());
            }
        }

        for field in &self.fields {
            for reference in field.rules.iter().filter_map(Rule::reference) {
                if reference == field.name {
                    return Err(SchemaDefinitionError::self_reference(&field.name));
                }
                if !declared.contains(reference) {
                    return Err(SchemaDefinitionError::undeclared_reference(
                        &field.name,
                        reference,
                    ));
                }
            }
        }

        Ok(())
    }

    /// Validates `data` against this schema.
    pub fn validate(&self, data: &FormData) -> Result<ValidationOutcome, SchemaDefinitionError> {
        engine::validate(self, data)
    }
}
