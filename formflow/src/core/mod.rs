//! Core domain model types for formflow.
//!
//! This module contains:
//! - The submission state enum
//! - Submission results and their payload-free status

mod result;
mod status;

pub use result::{SubmissionResult, SubmissionStatus};
pub use status::SubmissionState;
