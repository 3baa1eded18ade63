//! Schema-based validation.
//!
//! Schemas are explicit lists of tagged rules per field, evaluated by a
//! single interpreter ([`validate`]) with collect-all-errors semantics.

mod engine;
mod outcome;
mod rules;
mod schema;

pub use engine::validate;
pub use outcome::{FieldErrors, ValidationOutcome};
pub use rules::Rule;
pub use schema::{FieldSchema, ValidationSchema};
