//! Route guard decisions shared by protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical redirect behavior: a loading session
//! never redirects, a resolved session without a user goes to `/signin`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::SIGNIN_PATH;
use crate::state::auth::AuthState;

/// What a protected route should render for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session still resolving; render a neutral placeholder.
    Loading,
    /// Resolved with no user; redirect to sign-in.
    Unauthenticated,
    /// Resolved with a user; render the protected content.
    Authenticated,
}

pub fn guard_state(state: &AuthState) -> GuardState {
    if state.loading {
        GuardState::Loading
    } else if state.user.is_none() {
        GuardState::Unauthenticated
    } else {
        GuardState::Authenticated
    }
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    guard_state(state) == GuardState::Unauthenticated
}

/// Redirect to `/signin` whenever the session has resolved and no user is present.
pub fn install_unauth_redirect<F>(session: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(SIGNIN_PATH, NavigateOptions::default());
        }
    });
}
