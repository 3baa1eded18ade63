//! The submission state machine.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use super::action::SubmitAction;
use crate::config::SubmissionConfig;
use crate::core::{SubmissionResult, SubmissionState, SubmissionStatus};
use crate::errors::{FormflowError, RequestError};
use crate::fields::FieldRegistry;
use crate::observability::submission_span;
use crate::validation::{self, FieldErrors, ValidationOutcome};

/// Holds the state machine out of `Idle` for the duration of one cycle.
///
/// Dropping the guard returns the state to `Idle`, including when the
/// submit future itself is dropped mid-cycle.
struct CycleGuard<'a> {
    state: &'a Mutex<SubmissionState>,
}

impl<'a> CycleGuard<'a> {
    /// Moves `Idle -> Validating`, or returns `None` if a cycle is running.
    fn acquire(state: &'a Mutex<SubmissionState>) -> Option<Self> {
        let mut current = state.lock();
        if !current.is_idle() {
            return None;
        }
        *current = SubmissionState::Validating;
        debug!(from = %SubmissionState::Idle, to = %SubmissionState::Validating, "Submission state transition");
        Some(Self { state })
    }

    fn transition(&self, next: SubmissionState) {
        let mut current = self.state.lock();
        debug_assert!(
            current.can_transition_to(next),
            "illegal submission transition {current} -> {next}"
        );
        debug!(from = %*current, to = %next, "Submission state transition");
        *current = next;
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        let mut current = self.state.lock();
        debug!(from = %*current, to = %SubmissionState::Idle, "Submission state transition");
        *current = SubmissionState::Idle;
    }
}

/// Orchestrates submit cycles for one form.
///
/// At most one cycle runs at a time: a trigger arriving while the state is
/// not `Idle` is answered with [`SubmissionResult::Ignored`] and has no
/// side effects.
pub struct SubmissionController {
    registry: Arc<FieldRegistry>,
    action: Arc<dyn SubmitAction>,
    config: SubmissionConfig,
    state: Mutex<SubmissionState>,
    last_status: Mutex<Option<SubmissionStatus>>,
}

impl SubmissionController {
    /// Binds `action` to the form behind `registry`.
    pub fn new(registry: Arc<FieldRegistry>, action: Arc<dyn SubmitAction>) -> Self {
        Self {
            registry,
            action,
            config: SubmissionConfig::default(),
            state: Mutex::new(SubmissionState::Idle),
            last_status: Mutex::new(None),
        }
    }

    /// Sets the controller configuration.
    #[must_use]
    pub fn with_config(mut self, config: SubmissionConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    /// Returns true if a submit trigger would be accepted.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state().is_idle()
    }

    /// Returns the status of the most recent accepted cycle.
    #[must_use]
    pub fn last_status(&self) -> Option<SubmissionStatus> {
        *self.last_status.lock()
    }

    /// Returns the form registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<FieldRegistry> {
        &self.registry
    }

    /// Runs one submit cycle.
    pub async fn submit(&self) -> SubmissionResult {
        let Some(guard) = CycleGuard::acquire(&self.state) else {
            debug!(action = self.action.name(), "Submission already in progress, trigger ignored");
            return SubmissionResult::Ignored;
        };

        let span = submission_span(&Uuid::new_v4(), self.action.name());
        let result = self.run_cycle(&guard).instrument(span).await;

        *self.last_status.lock() = Some(result.status());
        drop(guard);
        result
    }

    async fn run_cycle(&self, guard: &CycleGuard<'_>) -> SubmissionResult {
        self.registry.clear_errors();
        let data = self.registry.snapshot();

        let outcome = match validation::validate(self.action.schema(), &data) {
            Ok(outcome) => outcome,
            Err(defect) => {
                error!(error = %defect, "Validation schema is malformed");
                guard.transition(SubmissionState::Failed);
                return self.fail(defect.into());
            }
        };

        let data = match outcome {
            ValidationOutcome::Success(data) => data,
            ValidationOutcome::Failure(failures) => {
                let errors: FieldErrors = failures.into_iter().collect();
                guard.transition(SubmissionState::Rejected);
                self.registry.set_errors(&errors);
                info!(fields = ?errors.paths(), "Submission rejected by validation");
                return SubmissionResult::ValidationRejected(errors);
            }
        };

        guard.transition(SubmissionState::Submitting);
        let executed = match self.config.timeout() {
            Some(limit) => tokio::time::timeout(limit, self.action.execute(&data))
                .await
                .unwrap_or_else(|_| {
                    let timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
                    Err(RequestError::Timeout { timeout_ms }.into())
                }),
            None => self.action.execute(&data).await,
        };

        match executed {
            Ok(()) => {
                guard.transition(SubmissionState::Succeeded);
                info!("Submission succeeded");
                SubmissionResult::Success
            }
            Err(err) => {
                warn!(error = %err, kind = err.kind(), "Submission failed");
                guard.transition(SubmissionState::Failed);
                self.fail(err)
            }
        }
    }

    fn fail(&self, err: FormflowError) -> SubmissionResult {
        self.action.on_failure(&err);
        SubmissionResult::RequestFailed(err)
    }
}

impl std::fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("action", &self.action.name())
            .field("state", &self.state())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PreconditionError;
    use crate::fields::{FormData, Input};
    use crate::validation::{FieldSchema, ValidationSchema};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct TestAction {
        schema: ValidationSchema,
        executions: AtomicUsize,
        failures: Mutex<Vec<String>>,
        fail_with: Option<FormflowError>,
        gate: Option<Arc<Notify>>,
        delay: Option<Duration>,
    }

    impl TestAction {
        fn new() -> Self {
            Self {
                schema: ValidationSchema::new()
                    .field(FieldSchema::string("name").required("Name required")),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl SubmitAction for TestAction {
        fn name(&self) -> &str {
            "test"
        }

        fn schema(&self) -> &ValidationSchema {
            &self.schema
        }

        async fn execute(&self, _data: &FormData) -> Result<(), FormflowError> {
            self.executions.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn on_failure(&self, error: &FormflowError) {
            self.failures.lock().push(error.kind().to_string());
        }
    }

    fn setup(action: TestAction) -> (SubmissionController, Input, Arc<TestAction>) {
        let registry = FieldRegistry::shared();
        let input = Input::mount(&registry, "name");
        let action = Arc::new(action);
        let controller = SubmissionController::new(registry, action.clone());
        (controller, input, action)
    }

    #[tokio::test]
    async fn test_success_cycle() {
        let (controller, input, action) = setup(TestAction::new());
        input.input("Ana");

        let result = controller.submit().await;
        assert!(result.is_success());
        assert_eq!(action.executions.load(Ordering::SeqCst), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.last_status(), Some(SubmissionStatus::Success));
    }

    #[tokio::test]
    async fn test_rejection_skips_action_and_sets_errors() {
        let (controller, input, action) = setup(TestAction::new());

        let result = controller.submit().await;
        assert_eq!(
            result.field_errors().unwrap().get("name"),
            Some("Name required")
        );
        assert_eq!(input.error().as_deref(), Some("Name required"));
        assert_eq!(action.executions.load(Ordering::SeqCst), 0);
        assert!(action.failures.lock().is_empty());
        assert!(controller.is_idle());
    }

    #[tokio::test]
    async fn test_errors_cleared_on_next_cycle() {
        let (controller, input, _) = setup(TestAction::new());
        controller.submit().await;
        assert!(input.is_errored());

        input.input("Ana");
        assert!(controller.submit().await.is_success());
        assert!(!input.is_errored());
    }

    #[tokio::test]
    async fn test_failure_reports_through_action() {
        let action = TestAction {
            fail_with: Some(PreconditionError::missing_token().into()),
            ..TestAction::new()
        };
        let (controller, input, action) = setup(action);
        input.input("Ana");

        let result = controller.submit().await;
        assert_eq!(result.cause().unwrap().kind(), "precondition");
        assert_eq!(*action.failures.lock(), vec!["precondition".to_string()]);
        assert!(controller.registry().errors().is_empty());
        assert!(controller.is_idle());
    }

    #[tokio::test]
    async fn test_concurrent_trigger_is_ignored() {
        let gate = Arc::new(Notify::new());
        let action = TestAction {
            gate: Some(gate.clone()),
            ..TestAction::new()
        };
        let (controller, input, action) = setup(action);
        input.input("Ana");

        let (first, (observed, second)) = tokio::join!(controller.submit(), async {
            tokio::task::yield_now().await;
            let observed = controller.state();
            let second = controller.submit().await;
            gate.notify_one();
            (observed, second)
        });

        assert_eq!(observed, SubmissionState::Submitting);
        assert!(second.is_ignored());
        assert!(first.is_success());
        assert_eq!(action.executions.load(Ordering::SeqCst), 1);
        assert_eq!(controller.last_status(), Some(SubmissionStatus::Success));
    }

    #[tokio::test]
    async fn test_timeout_fails_cycle() {
        let action = TestAction {
            delay: Some(Duration::from_secs(5)),
            ..TestAction::new()
        };
        let (controller, input, action) = setup(action);
        let controller = controller.with_config(SubmissionConfig::default().with_timeout(0.05));
        input.input("Ana");

        let result = controller.submit().await;
        assert!(matches!(
            result.cause(),
            Some(FormflowError::Request(RequestError::Timeout { .. }))
        ));
        assert_eq!(*action.failures.lock(), vec!["request".to_string()]);
        assert!(controller.is_idle());
    }

    #[tokio::test]
    async fn test_malformed_schema_surfaces_as_defect() {
        let action = TestAction {
            schema: ValidationSchema::new()
                .field(FieldSchema::string("name").equals_field("nickname", "mismatch")),
            ..TestAction::default()
        };
        let (controller, _input, action) = setup(action);

        let result = controller.submit().await;
        let cause = result.cause().unwrap();
        assert!(cause.is_defect());
        assert_eq!(action.executions.load(Ordering::SeqCst), 0);
        assert_eq!(*action.failures.lock(), vec!["schema_definition".to_string()]);
    }

    #[tokio::test]
    async fn test_dropped_submit_returns_to_idle() {
        let gate = Arc::new(Notify::new());
        let action = TestAction {
            gate: Some(gate),
            ..TestAction::new()
        };
        let (controller, input, _) = setup(action);
        input.input("Ana");

        let pending = tokio::time::timeout(Duration::from_millis(10), controller.submit()).await;
        assert!(pending.is_err());
        assert!(controller.is_idle());
    }
}
