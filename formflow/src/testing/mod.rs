//! Testing utilities for formflow forms.
//!
//! This module provides:
//! - A scripted HTTP client stub
//! - Assertions for submit cycle outcomes
//! - A password reset form wired to in-memory collaborators

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{
    assert_no_field_errors, assert_rejected_fields, assert_request_failed,
    assert_submission_succeeded, assert_toast,
};
pub use fixtures::TestResetForm;
pub use mocks::{RecordedRequest, StubHttpClient};
