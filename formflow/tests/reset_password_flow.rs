//! End-to-end submit cycles of the password reset form.

use std::time::Duration;

use formflow::prelude::*;
use formflow::testing::{
    assert_no_field_errors, assert_rejected_fields, assert_request_failed,
    assert_submission_succeeded, assert_toast, StubHttpClient, TestResetForm,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const RESET_HREF: &str = "/reset-password?token=xyz";

#[tokio::test]
async fn valid_reset_posts_once_and_redirects() {
    let t = TestResetForm::new(RESET_HREF, StubHttpClient::new());
    t.form.fill("abc123", "abc123");

    let result = t.form.submit().await;

    assert_submission_succeeded(&result);
    assert_eq!(t.http.call_count(), 1);
    let request = t.http.last_request().unwrap();
    assert_eq!(request.path, "/password/reset");
    assert_eq!(
        request.body,
        json!({"password": "abc123", "password_confirmation": "abc123", "token": "xyz"})
    );
    assert_toast(&t.toasts, ToastKind::Success, "Password changed");
    assert_eq!(t.navigator.location().pathname, "/");
    assert_no_field_errors(t.form.controller().registry());
    assert_eq!(t.form.controller().last_status(), Some(SubmissionStatus::Success));
}

#[tokio::test]
async fn empty_form_collects_required_error() {
    let t = TestResetForm::new(RESET_HREF, StubHttpClient::new());

    let result = t.form.submit().await;

    assert_rejected_fields(&result, &["password"]);
    assert_eq!(t.form.password.error().as_deref(), Some("Password is required"));
    assert!(!t.form.confirmation.is_errored());
    assert_eq!(t.http.call_count(), 0);
    assert!(t.toasts.is_empty());
}

#[tokio::test]
async fn both_fields_failing_yields_two_errors() {
    let t = TestResetForm::new(RESET_HREF, StubHttpClient::new());
    t.form.fill("", "something");

    let result = t.form.submit().await;

    assert_rejected_fields(&result, &["password", "password_confirmation"]);
    assert_eq!(t.http.call_count(), 0);
}

#[tokio::test]
async fn mismatch_rejects_confirmation_only() {
    let t = TestResetForm::new(RESET_HREF, StubHttpClient::new());
    t.form.fill("abc123", "different");

    let result = t.form.submit().await;

    assert_rejected_fields(&result, &["password_confirmation"]);
    assert!(t.form.confirmation.visual_state().errored);
    assert_eq!(t.http.call_count(), 0);
    assert_eq!(t.navigator.push_count(), 0);
}

#[tokio::test]
async fn corrected_fields_lose_their_errors() {
    let t = TestResetForm::new(RESET_HREF, StubHttpClient::new());
    t.form.fill("abc123", "different");
    t.form.submit().await;
    assert!(t.form.confirmation.is_errored());

    t.form.confirmation.input("abc123");
    let result = t.form.submit().await;

    assert_submission_succeeded(&result);
    assert_no_field_errors(t.form.controller().registry());
}

#[tokio::test]
async fn missing_token_never_reaches_service() {
    for href in ["/reset-password", "/reset-password?token=", "/reset-password?other=1"] {
        let t = TestResetForm::new(href, StubHttpClient::new());
        t.form.fill("abc123", "abc123");

        let result = t.form.submit().await;

        assert_request_failed(&result, "precondition");
        assert_eq!(t.http.call_count(), 0, "service called for {href}");
        assert_toast(&t.toasts, ToastKind::Error, "Password reset failed");
        assert_eq!(t.navigator.push_count(), 0);
    }
}

#[tokio::test]
async fn server_rejection_shows_generic_error() {
    let t = TestResetForm::new(RESET_HREF, StubHttpClient::with_status(422));
    t.form.fill("abc123", "abc123");

    let result = t.form.submit().await;

    assert_request_failed(&result, "request");
    assert_toast(&t.toasts, ToastKind::Error, "Password reset failed");
    assert_no_field_errors(t.form.controller().registry());
    assert_eq!(t.navigator.push_count(), 0);
    assert_eq!(t.form.controller().last_status(), Some(SubmissionStatus::RequestFailed));
}

#[tokio::test]
async fn transport_failure_shows_generic_error() {
    let t = TestResetForm::new(RESET_HREF, StubHttpClient::unreachable());
    t.form.fill("abc123", "abc123");

    let result = t.form.submit().await;

    assert!(matches!(
        result.cause(),
        Some(FormflowError::Request(RequestError::Transport { .. }))
    ));
    assert_toast(&t.toasts, ToastKind::Error, "Password reset failed");
}

#[tokio::test]
async fn rapid_submits_send_exactly_one_request() {
    let http = StubHttpClient::new().with_delay(Duration::from_millis(50));
    let t = TestResetForm::new(RESET_HREF, http);
    t.form.fill("abc123", "abc123");

    let results = futures::future::join_all((0..3).map(|_| t.form.submit())).await;

    assert_eq!(results.iter().filter(|r| r.is_success()).count(), 1);
    assert_eq!(results.iter().filter(|r| r.is_ignored()).count(), 2);
    assert_eq!(t.http.call_count(), 1);
    assert_eq!(t.toasts.len(), 1);
    assert!(t.form.controller().is_idle());
}

#[tokio::test]
async fn submission_timeout_fails_cycle() {
    let http = StubHttpClient::new().with_delay(Duration::from_secs(5));
    let t = TestResetForm::new(RESET_HREF, http);
    let form = t.form.with_submission_config(SubmissionConfig::default().with_timeout(0.05));
    form.fill("abc123", "abc123");

    let result = form.submit().await;

    assert!(matches!(
        result.cause(),
        Some(FormflowError::Request(RequestError::Timeout { .. }))
    ));
    assert_toast(&t.toasts, ToastKind::Error, "Password reset failed");
    assert!(form.controller().is_idle());
}

#[tokio::test]
async fn configured_messages_are_used() {
    let config: ResetPasswordConfig = serde_json::from_value(json!({
        "redirect_to": "/signin",
        "messages": {
            "confirmation_mismatch": "Confirmação incorreta",
            "success_title": "Senha alterada"
        }
    }))
    .unwrap();
    let t = TestResetForm::with_config(RESET_HREF, StubHttpClient::new(), config);

    t.form.fill("abc123", "abc");
    t.form.submit().await;
    assert_eq!(t.form.confirmation.error().as_deref(), Some("Confirmação incorreta"));

    t.form.confirmation.input("abc123");
    assert_submission_succeeded(&t.form.submit().await);
    assert_toast(&t.toasts, ToastKind::Success, "Senha alterada");
    assert_eq!(t.navigator.location().pathname, "/signin");
}
