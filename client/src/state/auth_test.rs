use super::*;
use crate::config::ClientConfig;
use futures::executor::block_on;

fn user(verified: bool) -> SessionUser {
    SessionUser {
        user_id: "u1".to_owned(),
        email: Some("alice@example.com".to_owned()),
        email_verified: verified,
        id_token: "id".to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_at_ms: u64::MAX,
        federated: false,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn resolving_state_is_loading_without_user() {
    let state = AuthState::resolving();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

// =============================================================
// Derived flags
// =============================================================

#[test]
fn resolved_user_is_signed_in() {
    let state = AuthState::resolved(Some(user(false)));
    assert!(state.is_signed_in());
    assert!(!state.is_verified());
}

#[test]
fn verified_flag_follows_user() {
    assert!(AuthState::resolved(Some(user(true))).is_verified());
    assert!(!AuthState::resolved(None).is_verified());
}

#[test]
fn loading_state_is_not_signed_in_even_with_user() {
    let state = AuthState { user: Some(user(true)), loading: true };
    assert!(!state.is_signed_in());
}

// =============================================================
// IdentityClient publishing
// =============================================================

fn client() -> IdentityClient {
    IdentityClient::new(ClientConfig::from_values(None, Some("test-key"), None, None).identity)
}

#[test]
fn new_client_starts_resolving() {
    let client = client();
    assert_eq!(client.session().get_untracked(), AuthState::resolving());
    assert_eq!(client.current_user(), None);
}

#[test]
fn sign_out_publishes_resolved_empty_session() {
    let client = client();
    client.publish(Some(user(true)));
    assert_eq!(client.session().get_untracked(), AuthState::resolved(Some(user(true))));

    block_on(client.sign_out()).unwrap();
    assert_eq!(client.session().get_untracked(), AuthState::resolved(None));
    assert_eq!(client.current_user(), None);
}

#[test]
fn sign_out_while_resolving_still_resolves() {
    let client = client();
    block_on(client.sign_out()).unwrap();
    assert_eq!(client.session().get_untracked(), AuthState::resolved(None));
}

#[test]
fn restore_applies_only_while_resolving() {
    assert!(restore_applies(&AuthState::resolving()));
    assert!(!restore_applies(&AuthState::resolved(None)));
    assert!(!restore_applies(&AuthState::resolved(Some(user(false)))));
}

#[test]
fn late_restore_does_not_replace_a_fresh_sign_in() {
    let client = client();
    let fresh = SessionUser { user_id: "federated".to_owned(), federated: true, ..user(true) };
    client.publish(Some(fresh.clone()));

    client.settle_restored(Some(user(false)));
    assert_eq!(client.current_user(), Some(fresh));

    client.settle_restored(None);
    assert!(client.session().get_untracked().is_signed_in());
}

#[test]
fn restore_settles_a_resolving_session() {
    let client = client();
    client.settle_restored(Some(user(false)));
    assert_eq!(client.session().get_untracked(), AuthState::resolved(Some(user(false))));
}
