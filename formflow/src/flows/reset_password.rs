//! Password reset: new password plus confirmation, authorized by a reset
//! token carried in the navigation query string.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::config::{ResetPasswordConfig, ResetPasswordMessages, SubmissionConfig};
use crate::errors::{FormflowError, PreconditionError, RequestError};
use crate::fields::{FieldRegistry, FormData, Input};
use crate::http::HttpClient;
use crate::navigation::Navigator;
use crate::notifications::{Toast, ToastSink};
use crate::submission::{SubmissionController, SubmitAction};
use crate::validation::{FieldSchema, ValidationSchema};

/// Name of the new password field.
pub const PASSWORD_FIELD: &str = "password";
/// Name of the confirmation field.
pub const CONFIRMATION_FIELD: &str = "password_confirmation";
/// Query key holding the reset token.
pub const TOKEN_PARAM: &str = "token";

/// JSON body of the reset request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// The new password.
    pub password: String,
    /// The new password, typed again.
    pub password_confirmation: String,
    /// The reset token.
    pub token: String,
}

/// Submit action resetting a password through the remote service.
pub struct ResetPasswordFlow {
    http: Arc<dyn HttpClient>,
    toasts: Arc<dyn ToastSink>,
    navigator: Arc<dyn Navigator>,
    config: ResetPasswordConfig,
    schema: ValidationSchema,
}

impl ResetPasswordFlow {
    /// Creates the flow with default configuration.
    pub fn new(
        http: Arc<dyn HttpClient>,
        toasts: Arc<dyn ToastSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let config = ResetPasswordConfig::default();
        Self {
            http,
            toasts,
            navigator,
            schema: Self::schema_for(&config.messages),
            config,
        }
    }

    /// Sets the flow configuration.
    #[must_use]
    pub fn with_config(mut self, config: ResetPasswordConfig) -> Self {
        self.schema = Self::schema_for(&config.messages);
        self.config = config;
        self
    }

    /// Builds the reset schema: a required password and a confirmation
    /// equal to it.
    #[must_use]
    pub fn schema_for(messages: &ResetPasswordMessages) -> ValidationSchema {
        ValidationSchema::new()
            .field(FieldSchema::string(PASSWORD_FIELD).required(&messages.password_required))
            .field(
                FieldSchema::string(CONFIRMATION_FIELD)
                    .equals_field(PASSWORD_FIELD, &messages.confirmation_mismatch),
            )
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &ResetPasswordConfig {
        &self.config
    }

    /// Reads the reset token from the current location.
    pub fn token(&self) -> Result<String, PreconditionError> {
        self.navigator
            .location()
            .query_param(TOKEN_PARAM)
            .ok_or_else(PreconditionError::missing_token)
    }

    fn request_body(data: &FormData, token: String) -> ResetPasswordRequest {
        let field = |name: &str| data.get(name).unwrap_or_default().to_string();
        ResetPasswordRequest {
            password: field(PASSWORD_FIELD),
            password_confirmation: field(CONFIRMATION_FIELD),
            token,
        }
    }
}

#[async_trait]
impl SubmitAction for ResetPasswordFlow {
    fn name(&self) -> &str {
        "reset_password"
    }

    fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    async fn execute(&self, data: &FormData) -> Result<(), FormflowError> {
        let token = self.token()?;
        let body = serde_json::to_value(Self::request_body(data, token))?;

        let endpoint = &self.config.endpoint;
        let response = self.http.post(endpoint, &body).await?;
        if !response.is_success() {
            return Err(RequestError::status(endpoint, response.status).into());
        }
        debug!(status = response.status, "Password reset accepted");

        let messages = &self.config.messages;
        self.toasts.add_toast(Toast::success(
            &messages.success_title,
            &messages.success_description,
        ));
        self.navigator.push(&self.config.redirect_to);
        Ok(())
    }

    fn on_failure(&self, _error: &FormflowError) {
        let messages = &self.config.messages;
        self.toasts
            .add_toast(Toast::error(&messages.error_title, &messages.error_description));
    }
}

impl std::fmt::Debug for ResetPasswordFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordFlow")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A mounted reset form: registry, both inputs and the controller.
#[derive(Debug)]
pub struct ResetPasswordForm {
    /// The new password input.
    pub password: Input,
    /// The confirmation input.
    pub confirmation: Input,
    controller: SubmissionController,
}

impl ResetPasswordForm {
    /// Mounts both inputs on a fresh registry and binds `flow` to it.
    pub fn mount(flow: ResetPasswordFlow) -> Self {
        let registry = FieldRegistry::shared();
        let password = Input::mount(&registry, PASSWORD_FIELD);
        let confirmation = Input::mount(&registry, CONFIRMATION_FIELD);
        Self {
            password,
            confirmation,
            controller: SubmissionController::new(registry, Arc::new(flow)),
        }
    }

    /// Sets the submission configuration.
    #[must_use]
    pub fn with_submission_config(mut self, config: SubmissionConfig) -> Self {
        self.controller = self.controller.with_config(config);
        self
    }

    /// Types both values.
    pub fn fill(&self, password: &str, confirmation: &str) {
        self.password.input(password);
        self.confirmation.input(confirmation);
    }

    /// Runs a submit cycle.
    pub async fn submit(&self) -> crate::core::SubmissionResult {
        self.controller.submit().await
    }

    /// Gets the controller.
    #[must_use]
    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }
}
