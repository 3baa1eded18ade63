//! A password reset form wired to in-memory collaborators.

use std::sync::Arc;

use super::mocks::StubHttpClient;
use crate::config::ResetPasswordConfig;
use crate::flows::{ResetPasswordFlow, ResetPasswordForm};
use crate::navigation::MemoryNavigator;
use crate::notifications::CollectingToastSink;

/// Builds a [`ResetPasswordForm`] and keeps handles on its collaborators.
#[derive(Debug)]
pub struct TestResetForm {
    /// The mounted form.
    pub form: ResetPasswordForm,
    /// The stubbed service.
    pub http: Arc<StubHttpClient>,
    /// Collected toasts.
    pub toasts: Arc<CollectingToastSink>,
    /// Navigation history.
    pub navigator: Arc<MemoryNavigator>,
}

impl TestResetForm {
    /// Mounts a form at `href` talking to `http`.
    #[must_use]
    pub fn new(href: &str, http: StubHttpClient) -> Self {
        Self::with_config(href, http, ResetPasswordConfig::default())
    }

    /// Mounts a form with a custom flow configuration.
    #[must_use]
    pub fn with_config(href: &str, http: StubHttpClient, config: ResetPasswordConfig) -> Self {
        let http = Arc::new(http);
        let toasts = Arc::new(CollectingToastSink::new());
        let navigator = Arc::new(MemoryNavigator::new(href));
        let flow = ResetPasswordFlow::new(http.clone(), toasts.clone(), navigator.clone())
            .with_config(config);
        Self {
            form: ResetPasswordForm::mount(flow),
            http,
            toasts,
            navigator,
        }
    }
}
