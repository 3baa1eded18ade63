//! Submission orchestration.
//!
//! A [`SubmissionController`] binds one form's [`FieldRegistry`](crate::fields::FieldRegistry)
//! to one [`SubmitAction`] and drives the state machine
//! `Idle -> Validating -> { Submitting | Rejected } -> { Succeeded | Failed } -> Idle`.

mod action;
mod controller;

pub use action::SubmitAction;
pub use controller::SubmissionController;
