use super::*;
use std::time::Duration;

use crate::util::schedule::Timeline;
use crate::util::validate::ValidationError;

fn filled(password: &str, confirm: &str) -> SignUpState {
    SignUpState {
        email: "new@example.com".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
        ..SignUpState::default()
    }
}

#[test]
fn short_password_fails_locally() {
    let mut state = filled("abc", "abc");
    assert_eq!(state.begin_password(), None);
    assert_eq!(
        state.banners.error,
        Some(ValidationError::PasswordTooShort.to_string())
    );
    assert!(!state.pending);
}

#[test]
fn mismatched_passwords_fail_locally() {
    let mut state = filled("abcdef", "abcxyz");
    assert_eq!(state.begin_password(), None);
    assert_eq!(state.banners.error.as_deref(), Some("Passwords do not match"));
    assert!(!state.pending);
}

#[test]
fn valid_form_yields_credentials() {
    let mut state = filled("abcdef", "abcdef");
    assert_eq!(
        state.begin_password(),
        Some(("new@example.com".to_owned(), "abcdef".to_owned()))
    );
    assert!(state.pending);
}

#[test]
fn password_success_goes_to_signin_flagged_from_signup() {
    let mut state = filled("abcdef", "abcdef");
    state.begin_password();

    let mut timeline = Timeline::default();
    timeline.schedule(state.password_succeeded());
    assert_eq!(state.banners.success.as_deref(), Some(SIGNUP_SUCCESS));
    assert!(timeline.advance(Duration::from_secs(1)).is_empty());
    assert_eq!(
        timeline.advance(Duration::from_secs(1)),
        vec![ScreenAction::Navigate(SIGNIN_FROM_SIGNUP_PATH)]
    );
}

#[test]
fn federated_success_goes_to_protected_root() {
    let mut state = SignUpState::default();
    assert!(state.begin_federated());
    let task = state.federated_succeeded();
    assert_eq!(task.action, ScreenAction::Navigate(HOME_PATH));
    assert_eq!(state.banners.success.as_deref(), Some(FEDERATED_SIGNUP_SUCCESS));
}

#[test]
fn provider_failure_is_shown_verbatim() {
    let mut state = filled("abcdef", "abcdef");
    state.begin_password();
    state.fail(&AuthError::new("EMAIL_EXISTS"));
    assert_eq!(state.banners.error.as_deref(), Some("EMAIL_EXISTS"));
    assert!(state.can_submit());
}

#[test]
fn new_attempt_clears_previous_error() {
    let mut state = filled("abc", "abc");
    state.begin_password();
    state.password = "abcdef".to_owned();
    state.confirm_password = "abcdef".to_owned();
    assert!(state.begin_password().is_some());
    assert_eq!(state.banners.error, None);
}

#[test]
fn signed_in_visitor_redirects_only_when_idle() {
    let auth = AuthState::resolved(Some(crate::net::types::SessionUser {
        user_id: "u1".to_owned(),
        email: None,
        email_verified: false,
        id_token: "id".to_owned(),
        refresh_token: "r".to_owned(),
        expires_at_ms: u64::MAX,
        federated: false,
    }));
    let mut state = filled("abcdef", "abcdef");
    assert_eq!(signed_up_redirect(&auth, &state), Some(HOME_PATH));

    state.begin_password();
    assert_eq!(signed_up_redirect(&auth, &state), None);
}

#[test]
fn federated_start_is_refused_while_password_signup_runs() {
    let mut state = filled("abcdef", "abcdef");
    state.begin_password();
    assert!(!state.begin_federated());
    FederatedFlow::fail(&mut state, &AuthError::new("OPERATION_NOT_ALLOWED"));
    assert!(state.can_submit());
}
