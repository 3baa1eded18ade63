//! # Formflow
//!
//! Form field registration, schema validation and an async submission
//! state machine.
//!
//! Formflow provides:
//!
//! - **Field registration**: inputs register named handles with a form-scoped
//!   registry and track focus, fill and error state
//! - **Validation**: declarative per-field rules, including cross-field
//!   equality, evaluated with collect-all-errors semantics
//! - **Submission**: one in-flight cycle per form, from validation through a
//!   service call to notification and navigation
//! - **Password reset**: a complete submit action built on the above
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use formflow::prelude::*;
//!
//! # async fn run() -> Result<(), FormflowError> {
//! let config = FormflowConfig::from_json_str(r#"{"api": {"base_url": "https://api.example.com"}}"#)?;
//! init_logging(&config.logging);
//!
//! let flow = ResetPasswordFlow::new(
//!     Arc::new(ReqwestHttpClient::new(config.api.clone())?),
//!     Arc::new(LoggingToastSink::default()),
//!     Arc::new(MemoryNavigator::new("/reset-password?token=xyz")),
//! )
//! .with_config(config.reset_password.clone());
//!
//! let form = ResetPasswordForm::mount(flow).with_submission_config(config.submission.clone());
//! form.fill("abc123", "abc123");
//! let result = form.submit().await;
//! assert!(result.is_success());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod fields;
pub mod flows;
pub mod http;
pub mod navigation;
pub mod notifications;
pub mod observability;
pub mod submission;
pub mod testing;
pub mod validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{
        ApiConfig, FormflowConfig, LoggingConfig, ResetPasswordConfig, ResetPasswordMessages,
        SubmissionConfig,
    };
    pub use crate::core::{SubmissionResult, SubmissionState, SubmissionStatus};
    pub use crate::errors::{
        FieldValidationError, FormflowError, PreconditionError, RequestError,
        SchemaDefinitionError,
    };
    pub use crate::fields::{FieldHandle, FieldRegistry, FormData, Input, ValueSource};
    pub use crate::flows::{ResetPasswordFlow, ResetPasswordForm};
    #[cfg(feature = "http-client")]
    pub use crate::http::ReqwestHttpClient;
    pub use crate::http::{HttpClient, HttpResponse};
    pub use crate::navigation::{Location, MemoryNavigator, Navigator};
    pub use crate::notifications::{
        CollectingToastSink, LoggingToastSink, NoOpToastSink, Toast, ToastKind, ToastSink,
    };
    pub use crate::observability::init_logging;
    pub use crate::submission::{SubmissionController, SubmitAction};
    pub use crate::validation::{
        validate, FieldErrors, FieldSchema, Rule, ValidationOutcome, ValidationSchema,
    };
}
