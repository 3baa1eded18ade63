//! The submit action bound into a controller.

use async_trait::async_trait;

use crate::errors::FormflowError;
use crate::fields::FormData;
use crate::validation::ValidationSchema;

/// What a form does with validated data.
///
/// The controller validates the snapshot against [`SubmitAction::schema`]
/// and calls [`SubmitAction::execute`] only on success. Success side effects
/// (notifications, navigation) belong in `execute`. Every non-field error of
/// the cycle is routed to [`SubmitAction::on_failure`], the single place
/// that decides the generic user-facing notification.
#[async_trait]
pub trait SubmitAction: Send + Sync {
    /// Returns the action name, used in logs.
    fn name(&self) -> &str;

    /// Returns the schema the form data must satisfy.
    fn schema(&self) -> &ValidationSchema;

    /// Performs the action with validated data.
    async fn execute(&self, data: &FormData) -> Result<(), FormflowError>;

    /// Reports a failed cycle to the user.
    ///
    /// Must not expose `error` verbatim; it is already logged.
    fn on_failure(&self, error: &FormflowError);
}
