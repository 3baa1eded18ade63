//! The validation interpreter.

use tracing::debug;

use super::outcome::ValidationOutcome;
use super::schema::ValidationSchema;
use crate::errors::{FieldValidationError, SchemaDefinitionError};
use crate::fields::FormData;

/// Validates `data` against `schema`.
///
/// Every declared field is evaluated even after an earlier field fails.
/// Within one field, rules run in declaration order and the first failing
/// rule supplies the field's only message. Cross-field rules read the
/// referenced value from `data`, i.e. as it is at validation time.
///
/// A malformed schema is returned as `Err`, never as a `Failure`.
pub fn validate(
    schema: &ValidationSchema,
    data: &FormData,
) -> Result<ValidationOutcome, SchemaDefinitionError> {
    schema.check()?;

    let mut errors = Vec::new();
    for field in schema.fields() {
        let value = data.get(field.name());
        let failed = field
            .rules()
            .iter()
            .find(|rule| !rule.passes(value, |name| data.get(name)));

        if let Some(rule) = failed {
            debug!(field = %field.name(), rule = rule.kind(), "Validation rule failed");
            errors.push(FieldValidationError::new(field.name(), rule.message()));
        }
    }

    if errors.is_empty() {
        Ok(ValidationOutcome::Success(data.clone()))
    } else {
        Ok(ValidationOutcome::Failure(errors))
    }
}
