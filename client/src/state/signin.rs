//! Sign-in screen state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives `/signin`: one identity call per attempt, a two-second success
//! banner, then a scheduled move to the verification gate.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use std::time::Duration;

use super::auth::AuthState;
use super::screen::{Banners, FederatedFlow, HasBanners, ScreenAction};
use crate::app::VERIFY_EMAIL_PATH;
use crate::net::identity::AuthError;
use crate::util::schedule::Scheduled;

pub const SIGNIN_SUCCESS: &str = "Signed in successfully!";
pub const FEDERATED_SIGNIN_SUCCESS: &str = "Signed in with Google successfully!";

/// How long the success banner stays up before navigating.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInState {
    pub email: String,
    pub password: String,
    pub banners: Banners,
    /// An identity call is in flight.
    pub pending: bool,
    /// Navigation has been scheduled; the screen accepts no more input.
    pub navigating: bool,
}

impl HasBanners for SignInState {
    fn banners_mut(&mut self) -> &mut Banners {
        &mut self.banners
    }
}

impl SignInState {
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.navigating
    }

    /// Start an attempt. Returns `false` when one is already running or done.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.banners.dismiss_error();
        self.pending = true;
        true
    }

    pub fn succeed(&mut self, message: &str) -> Scheduled<ScreenAction> {
        self.pending = false;
        self.navigating = true;
        self.banners.show_success(message);
        Scheduled::new(SUCCESS_REDIRECT_DELAY, ScreenAction::Navigate(VERIFY_EMAIL_PATH))
    }

    pub fn fail(&mut self, err: &AuthError) {
        self.pending = false;
        self.banners.show_error(err.message.clone());
    }
}

impl FederatedFlow for SignInState {
    fn begin_federated(&mut self) -> bool {
        self.begin()
    }

    fn federated_succeeded(&mut self) -> Scheduled<ScreenAction> {
        self.succeed(FEDERATED_SIGNIN_SUCCESS)
    }

    fn abandon(&mut self) {
        self.pending = false;
    }

    fn fail(&mut self, err: &AuthError) {
        SignInState::fail(self, err);
    }
}

/// Where an already signed-in visitor should be sent, if anywhere.
///
/// A visitor arriving straight from sign-up is left alone, as is a screen that
/// is already busy signing in or navigating.
pub fn signed_in_redirect(auth: &AuthState, from_signup: bool, screen: &SignInState) -> Option<&'static str> {
    if auth.is_signed_in() && !from_signup && screen.can_submit() {
        Some(VERIFY_EMAIL_PATH)
    } else {
        None
    }
}
