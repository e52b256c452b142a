//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `IdentityClient` owns the only writable handle to the session cell. Route
//! guards and screens subscribe through [`IdentityClient::session`]; every
//! successful identity call publishes the new session to all of them at once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::IdentityConfig;
use crate::net::identity::{self, AuthError};
use crate::net::types::SessionUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// True until the cached session has been checked with the provider.
    pub loading: bool,
}

impl AuthState {
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    pub fn resolved(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    pub fn is_verified(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.email_verified)
    }
}

/// A restored session only lands while nothing else has settled the session.
pub(crate) fn restore_applies(current: &AuthState) -> bool {
    current.loading
}

/// Handle to the identity backend plus the published session.
///
/// Cheap to copy; provided once via context by the root component.
#[derive(Clone, Copy)]
pub struct IdentityClient {
    state: RwSignal<AuthState>,
    config: StoredValue<IdentityConfig>,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self { state: RwSignal::new(AuthState::resolving()), config: StoredValue::new(config) }
    }

    /// Read-only view of the session for subscribers.
    pub fn session(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current user without subscribing.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.state.with_untracked(|s| s.user.clone())
    }

    fn config(&self) -> IdentityConfig {
        self.config.get_value()
    }

    fn publish(&self, user: Option<SessionUser>) {
        match &user {
            Some(user) => identity::store_cached_session(user),
            None => identity::clear_cached_session(),
        }
        let _ = self.state.try_set(AuthState::resolved(user));
    }

    /// Publish the restored session unless a sign-in already settled it.
    #[cfg(any(test, feature = "hydrate"))]
    fn settle_restored(&self, user: Option<SessionUser>) {
        if self.state.try_with_untracked(restore_applies).unwrap_or(false) {
            self.publish(user);
        }
    }

    /// Resolve the cached session from a previous visit.
    ///
    /// The token is refreshed and `emailVerified` re-read; a failed refresh
    /// means the session expired and it is discarded.
    pub fn restore(&self) {
        #[cfg(feature = "hydrate")]
        {
            let client = *self;
            leptos::task::spawn_local(async move {
                let Some(cached) = identity::load_cached_session() else {
                    client.settle_restored(None);
                    return;
                };
                match identity::refresh_session(&client.config(), &cached).await {
                    Ok(user) => client.settle_restored(Some(user)),
                    Err(e) => {
                        log::info!("cached session discarded: {e}");
                        client.settle_restored(None);
                    }
                }
            });
        }
    }

    /// # Errors
    ///
    /// Returns the provider's message verbatim.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let user = identity::sign_in_with_password(&self.config(), email, password).await?;
        self.publish(Some(user));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the provider's message verbatim.
    pub async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let user = identity::sign_up_with_password(&self.config(), email, password).await?;
        self.publish(Some(user));
        Ok(())
    }

    /// Leave for the federated provider; it redirects back to `return_path`.
    ///
    /// # Errors
    ///
    /// Returns the provider's message verbatim.
    pub async fn sign_in_federated(&self, return_path: &str) -> Result<(), AuthError> {
        let continue_uri = crate::util::browser::absolute_url(return_path)
            .ok_or_else(|| AuthError::new("federated sign-in requires a browser"))?;
        let auth_uri = identity::begin_federated(&self.config(), &continue_uri).await?;
        crate::util::browser::set_location(&auth_uri);
        Ok(())
    }

    /// Finish a federated sign-in if this page load is the provider's redirect.
    ///
    /// Returns `Ok(true)` when a session was established.
    ///
    /// # Errors
    ///
    /// Returns the provider's message verbatim.
    pub async fn complete_federated(&self) -> Result<bool, AuthError> {
        let Some(request_uri) = crate::util::browser::current_href() else {
            return Ok(false);
        };
        match identity::complete_federated(&self.config(), &request_uri).await? {
            Some(user) => {
                self.publish(Some(user));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Send a verification link to `user`'s address.
    ///
    /// # Errors
    ///
    /// Returns the provider's message verbatim. An expired token that cannot be
    /// refreshed also ends the session.
    pub async fn send_verification_email(&self, user: &SessionUser) -> Result<(), AuthError> {
        let config = self.config();
        let id_token = if user.token_expired(crate::util::schedule::now_ms()) {
            match identity::refresh_session(&config, user).await {
                Ok(fresh) => {
                    let token = fresh.id_token.clone();
                    self.publish(Some(fresh));
                    token
                }
                Err(e) => {
                    self.publish(None);
                    return Err(e);
                }
            }
        } else {
            user.id_token.clone()
        };
        identity::send_verification_email(&config, &id_token).await
    }

    /// Drop the session locally. Tokens simply expire at the provider.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible so screens handle sign-out uniformly
    /// with the other identity calls.
    #[allow(clippy::unused_async)]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.publish(None);
        Ok(())
    }
}
