use super::*;
use crate::net::types::SessionUser;
use crate::state::screen::apply_screen_action;
use crate::util::schedule::Timeline;

fn session(verified: bool) -> AuthState {
    AuthState::resolved(Some(SessionUser {
        user_id: "u1".to_owned(),
        email: Some("a@b.com".to_owned()),
        email_verified: verified,
        id_token: "id".to_owned(),
        refresh_token: "r".to_owned(),
        expires_at_ms: u64::MAX,
        federated: false,
    }))
}

#[test]
fn absent_session_goes_to_signin() {
    assert_eq!(verification_redirect(&AuthState::resolved(None)), Some(SIGNIN_PATH));
}

#[test]
fn verified_session_goes_home() {
    assert_eq!(verification_redirect(&session(true)), Some(HOME_PATH));
}

#[test]
fn unverified_session_stays() {
    assert_eq!(verification_redirect(&session(false)), None);
}

#[test]
fn loading_session_waits() {
    assert_eq!(verification_redirect(&AuthState::resolving()), None);
}

#[test]
fn resend_success_banner_clears_after_five_seconds() {
    let mut state = VerifyState::default();
    assert!(state.begin_resend());
    let mut timeline = Timeline::default();
    timeline.schedule(state.resend_succeeded());
    assert_eq!(state.banners.success.as_deref(), Some(VERIFICATION_SENT));

    assert!(timeline.advance(Duration::from_millis(4999)).is_empty());
    for action in timeline.advance(Duration::from_millis(1)) {
        assert_eq!(apply_screen_action(&mut state, action), None);
    }
    assert_eq!(state.banners.success, None);
}

#[test]
fn resend_error_banner_clears_after_five_seconds() {
    let mut state = VerifyState::default();
    state.begin_resend();
    let mut timeline = Timeline::default();
    timeline.schedule(state.resend_failed(&AuthError::new("TOO_MANY_ATTEMPTS_TRY_LATER")));
    assert_eq!(state.banners.error.as_deref(), Some("TOO_MANY_ATTEMPTS_TRY_LATER"));
    assert!(!state.sending);

    for action in timeline.advance(BANNER_DISPLAY) {
        apply_screen_action(&mut state, action);
    }
    assert_eq!(state.banners.error, None);
}

#[test]
fn resend_is_ignored_while_sending() {
    let mut state = VerifyState::default();
    assert!(state.begin_resend());
    assert!(!state.begin_resend());
}

#[test]
fn second_resend_banner_gets_its_own_five_seconds() {
    let mut state = VerifyState::default();
    let mut timeline = Timeline::default();

    assert!(state.begin_resend());
    timeline.schedule(state.resend_succeeded());
    timeline.advance(Duration::from_secs(4));

    assert!(state.begin_resend());
    timeline.schedule(state.resend_succeeded());

    for action in timeline.advance(Duration::from_secs(1)) {
        apply_screen_action(&mut state, action);
    }
    assert_eq!(state.banners.success.as_deref(), Some(VERIFICATION_SENT));

    for action in timeline.advance(Duration::from_secs(4)) {
        apply_screen_action(&mut state, action);
    }
    assert_eq!(state.banners.success, None);
}

#[test]
fn second_resend_error_keeps_its_own_window() {
    let mut state = VerifyState::default();
    let mut timeline = Timeline::default();

    state.begin_resend();
    timeline.schedule(state.resend_failed(&AuthError::new("QUOTA_EXCEEDED")));
    timeline.advance(Duration::from_secs(3));
    state.begin_resend();
    timeline.schedule(state.resend_failed(&AuthError::new("TOO_MANY_ATTEMPTS_TRY_LATER")));

    for action in timeline.advance(Duration::from_secs(2)) {
        apply_screen_action(&mut state, action);
    }
    assert_eq!(state.banners.error.as_deref(), Some("TOO_MANY_ATTEMPTS_TRY_LATER"));
}
