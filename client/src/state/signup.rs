//! Sign-up screen state machine.
//!
//! Password sign-ups land on `/signin?from=signup` so the fresh, still
//! unverified session is not bounced straight back into the app. Federated
//! sign-ups are already verified and go to the protected root.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::auth::AuthState;
use super::screen::{Banners, FederatedFlow, HasBanners, ScreenAction};
use super::signin::SUCCESS_REDIRECT_DELAY;
use crate::app::{HOME_PATH, SIGNIN_FROM_SIGNUP_PATH};
use crate::net::identity::AuthError;
use crate::util::schedule::Scheduled;
use crate::util::validate::validate_signup_password;

pub const SIGNUP_SUCCESS: &str = "Account created successfully! Redirecting to login...";
pub const FEDERATED_SIGNUP_SUCCESS: &str = "Account created with Google successfully!";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub banners: Banners,
    pub pending: bool,
    pub navigating: bool,
}

impl HasBanners for SignUpState {
    fn banners_mut(&mut self) -> &mut Banners {
        &mut self.banners
    }
}

impl SignUpState {
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.navigating
    }

    /// Validate locally and start a password sign-up.
    ///
    /// Returns the `(email, password)` to send, or `None` when the screen is
    /// busy or validation failed (the error banner then holds the reason).
    pub fn begin_password(&mut self) -> Option<(String, String)> {
        if !self.can_submit() {
            return None;
        }
        self.banners.dismiss_error();
        if let Err(err) = validate_signup_password(&self.password, &self.confirm_password) {
            self.banners.show_error(err.to_string());
            return None;
        }
        self.pending = true;
        Some((self.email.clone(), self.password.clone()))
    }

    pub fn password_succeeded(&mut self) -> Scheduled<ScreenAction> {
        self.finish(SIGNUP_SUCCESS, SIGNIN_FROM_SIGNUP_PATH)
    }

    pub fn fail(&mut self, err: &AuthError) {
        self.pending = false;
        self.banners.show_error(err.message.clone());
    }

    fn finish(&mut self, message: &str, path: &'static str) -> Scheduled<ScreenAction> {
        self.pending = false;
        self.navigating = true;
        self.banners.show_success(message);
        Scheduled::new(SUCCESS_REDIRECT_DELAY, ScreenAction::Navigate(path))
    }
}

impl FederatedFlow for SignUpState {
    fn begin_federated(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.banners.dismiss_error();
        self.pending = true;
        true
    }

    fn federated_succeeded(&mut self) -> Scheduled<ScreenAction> {
        self.finish(FEDERATED_SIGNUP_SUCCESS, HOME_PATH)
    }

    fn abandon(&mut self) {
        self.pending = false;
    }

    fn fail(&mut self, err: &AuthError) {
        SignUpState::fail(self, err);
    }
}

/// An already signed-in visitor goes to the protected root unless this screen
/// is mid-flow.
pub fn signed_up_redirect(auth: &AuthState, screen: &SignUpState) -> Option<&'static str> {
    (auth.is_signed_in() && screen.can_submit()).then_some(HOME_PATH)
}
