//! Configuration types.
//!
//! Every section deserializes with defaults, so an empty JSON object is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::FormflowError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormflowConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Submission controller settings.
    #[serde(default)]
    pub submission: SubmissionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Password reset flow settings.
    #[serde(default)]
    pub reset_password: ResetPasswordConfig,
}

impl FormflowConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, FormflowError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), FormflowError> {
        if self.api.base_url.trim().is_empty() {
            return Err(FormflowError::Config("api.base_url cannot be empty".to_string()));
        }
        self.api.timeout()?;
        if let Some(seconds) = self.submission.timeout_seconds {
            if !(seconds.is_finite() && seconds > 0.0) {
                return Err(FormflowError::Config(
                    "submission.timeout_seconds must be a positive number".to_string(),
                ));
            }
        }
        if !self.reset_password.endpoint.starts_with('/') {
            return Err(FormflowError::Config(
                "reset_password.endpoint must start with '/'".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is joined to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Additional headers to include.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout() -> f64 {
    30.0
}

fn default_user_agent() -> String {
    concat!("formflow/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }
}

impl ApiConfig {
    /// Creates a configuration pointing at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the timeout.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Gets timeout as Duration.
    ///
    /// Fails unless `timeout_seconds` is a positive, representable number.
    pub fn timeout(&self) -> Result<Duration, FormflowError> {
        let seconds = self.timeout_seconds;
        if !(seconds.is_finite() && seconds > 0.0) {
            return Err(FormflowError::Config(
                "api.timeout_seconds must be a positive number".to_string(),
            ));
        }
        Duration::try_from_secs_f64(seconds)
            .map_err(|e| FormflowError::Config(format!("invalid api.timeout_seconds: {e}")))
    }

    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Configuration for the submission controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Upper bound on the submit action, in seconds. `None` waits forever.
    #[serde(default)]
    pub timeout_seconds: Option<f64>,
}

impl SubmissionConfig {
    /// Sets the submission timeout.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Gets the timeout as Duration, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|s| s.is_finite() && *s > 0.0)
            .map(Duration::from_secs_f64)
    }
}

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, e.g. `info` or `formflow=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Configuration for the password reset flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordConfig {
    /// Service endpoint receiving the reset request.
    #[serde(default = "default_reset_endpoint")]
    pub endpoint: String,
    /// Where to navigate after a successful reset.
    #[serde(default = "default_redirect")]
    pub redirect_to: String,
    /// User-facing texts.
    #[serde(default)]
    pub messages: ResetPasswordMessages,
}

fn default_reset_endpoint() -> String {
    "/password/reset".to_string()
}

fn default_redirect() -> String {
    "/".to_string()
}

impl Default for ResetPasswordConfig {
    fn default() -> Self {
        Self {
            endpoint: default_reset_endpoint(),
            redirect_to: default_redirect(),
            messages: ResetPasswordMessages::default(),
        }
    }
}

/// Fixed texts shown by the password reset flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetPasswordMessages {
    /// Field error when the password is empty.
    pub password_required: String,
    /// Field error when the confirmation differs.
    pub confirmation_mismatch: String,
    /// Success toast title.
    pub success_title: String,
    /// Success toast description.
    pub success_description: String,
    /// Failure toast title.
    pub error_title: String,
    /// Failure toast description.
    pub error_description: String,
}

impl Default for ResetPasswordMessages {
    fn default() -> Self {
        Self {
            password_required: "Password is required".to_string(),
            confirmation_mismatch: "Password confirmation does not match".to_string(),
            success_title: "Password changed".to_string(),
            success_description: "Your password has been changed, you can now sign in"
                .to_string(),
            error_title: "Password reset failed".to_string(),
            error_description: "An error occurred while resetting your password, please try again"
                .to_string(),
        }
    }
}
