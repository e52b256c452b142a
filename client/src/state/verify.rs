//! Email-verification gate state.
//!
//! `/email/auth` decides for itself where a visitor belongs; the route guard
//! only knows about signed-in vs. signed-out.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use std::time::Duration;

use super::auth::AuthState;
use super::screen::{Banners, HasBanners, ScreenAction};
use crate::app::{HOME_PATH, SIGNIN_PATH};
use crate::net::identity::AuthError;
use crate::util::schedule::Scheduled;

pub const VERIFICATION_SENT: &str = "Verification email sent! Check your inbox.";

/// How long resend banners stay visible.
pub const BANNER_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyState {
    pub banners: Banners,
    pub sending: bool,
}

impl HasBanners for VerifyState {
    fn banners_mut(&mut self) -> &mut Banners {
        &mut self.banners
    }
}

impl VerifyState {
    pub fn begin_resend(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    pub fn resend_succeeded(&mut self) -> Scheduled<ScreenAction> {
        self.sending = false;
        let seq = self.banners.show_success(VERIFICATION_SENT);
        Scheduled::new(BANNER_DISPLAY, ScreenAction::ClearSuccess(seq))
    }

    pub fn resend_failed(&mut self, err: &AuthError) -> Scheduled<ScreenAction> {
        self.sending = false;
        let seq = self.banners.show_error(err.message.clone());
        Scheduled::new(BANNER_DISPLAY, ScreenAction::ClearError(seq))
    }

    /// Sign-out errors stay until the next action replaces them.
    pub fn sign_out_failed(&mut self, err: &AuthError) {
        self.banners.show_error(err.message.clone());
    }
}

/// Where the gate sends a visitor once the session has resolved.
///
/// `None` means stay and offer the resend/logout actions.
pub fn verification_redirect(auth: &AuthState) -> Option<&'static str> {
    if auth.loading {
        return None;
    }
    if auth.user.is_none() {
        Some(SIGNIN_PATH)
    } else if auth.is_verified() {
        Some(HOME_PATH)
    } else {
        None
    }
}
