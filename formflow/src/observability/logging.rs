//! `tracing` subscriber setup and the per-cycle span.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber described by `config`.
///
/// An invalid filter directive falls back to `info`. Returns `false` if a
/// subscriber was already installed, in which case nothing changes.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = env_filter(&config.level);

    if config.json {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .pretty()
            .try_init()
            .is_ok()
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Creates the span wrapping one submit cycle.
///
/// ```
/// use formflow::observability::submission_span;
///
/// let span = submission_span(&uuid::Uuid::new_v4(), "reset_password");
/// let _guard = span.enter();
/// tracing::info!("validating");
/// ```
pub fn submission_span(cycle_id: &Uuid, action: &str) -> tracing::Span {
    tracing::info_span!("submit", cycle_id = %cycle_id, action = action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        assert_eq!(env_filter("not a [valid directive").to_string(), "info");
        assert_eq!(env_filter("formflow=debug").to_string(), "formflow=debug");
    }

    #[test]
    fn test_init_with_subscriber_present_is_noop() {
        let _ = tracing::subscriber::set_global_default(tracing::subscriber::NoSubscriber::default());
        let config = LoggingConfig {
            level: "debug".to_string(),
            json: true,
        };
        assert!(!init_logging(&config));
    }

    #[test]
    fn test_submission_span_fields() {
        let span = submission_span(&Uuid::new_v4(), "reset_password");
        let _guard = span.enter();
        tracing::debug!("inside cycle");
    }
}
