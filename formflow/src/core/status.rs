//! Submission state enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The state of a form's submission state machine.
///
/// ```text
/// Idle -> Validating -> { Submitting | Rejected } -> { Succeeded | Failed } -> Idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// No cycle in progress; a submit trigger is accepted.
    #[default]
    Idle,
    /// Errors cleared, snapshot being validated.
    Validating,
    /// Validation failed; errors are being distributed to fields.
    Rejected,
    /// The bound action is running.
    Submitting,
    /// The bound action completed.
    Succeeded,
    /// The bound action failed or timed out.
    Failed,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::Rejected => write!(f, "rejected"),
            Self::Submitting => write!(f, "submitting"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl SubmissionState {
    /// Returns true if a submit trigger would be accepted.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a cycle is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true if the state ends a cycle (before returning to idle).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Succeeded | Self::Failed)
    }

    /// Returns true if moving from `self` to `next` is a legal transition.
    #[must_use]
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Validating)
                | (Self::Validating, Self::Rejected | Self::Submitting | Self::Failed)
                | (Self::Submitting, Self::Succeeded | Self::Failed)
                | (Self::Rejected | Self::Succeeded | Self::Failed, Self::Idle)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(SubmissionState::Idle.to_string(), "idle");
        assert_eq!(SubmissionState::Submitting.to_string(), "submitting");
        assert_eq!(SubmissionState::Rejected.to_string(), "rejected");
    }

    #[test]
    fn test_state_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
        assert!(SubmissionState::Idle.is_idle());
        assert!(SubmissionState::Validating.is_busy());
    }

    #[test]
    fn test_transitions() {
        use SubmissionState::*;

        assert!(Idle.can_transition_to(Validating));
        assert!(Validating.can_transition_to(Rejected));
        assert!(Validating.can_transition_to(Submitting));
        assert!(Submitting.can_transition_to(Succeeded));
        assert!(Submitting.can_transition_to(Failed));
        assert!(Rejected.can_transition_to(Idle));

        assert!(!Idle.can_transition_to(Submitting));
        assert!(!Rejected.can_transition_to(Submitting));
        assert!(!Submitting.can_transition_to(Validating));
    }

    #[test]
    fn test_state_serialize() {
        let json = serde_json::to_string(&SubmissionState::Submitting).unwrap();
        assert_eq!(json, r#""submitting""#);

        let state: SubmissionState = serde_json::from_str(r#""failed""#).unwrap();
        assert_eq!(state, SubmissionState::Failed);
    }
}
