//! Pieces shared by the auth screens: banners, delayed actions, and the
//! federated sign-in hand-off.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use crate::net::identity::AuthError;
use crate::util::schedule::Scheduled;

/// Delayed transition emitted by an auth screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenAction {
    Navigate(&'static str),
    /// Clear the success banner if it is still the one shown with this sequence number.
    ClearSuccess(u64),
    ClearError(u64),
}

/// At most one success and one error message at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banners {
    pub success: Option<String>,
    pub error: Option<String>,
    success_seq: u64,
    error_seq: u64,
}

impl Banners {
    /// Returns the sequence number a later `ClearSuccess` must carry.
    pub fn show_success(&mut self, message: impl Into<String>) -> u64 {
        self.success = Some(message.into());
        self.success_seq += 1;
        self.success_seq
    }

    /// Returns the sequence number a later `ClearError` must carry.
    pub fn show_error(&mut self, message: impl Into<String>) -> u64 {
        self.error = Some(message.into());
        self.error_seq += 1;
        self.error_seq
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Screens whose state carries banners.
pub trait HasBanners {
    fn banners_mut(&mut self) -> &mut Banners;
}

/// Apply a fired `ScreenAction`; returns the path to navigate to, if any.
pub fn apply_screen_action<S: HasBanners>(state: &mut S, action: ScreenAction) -> Option<&'static str> {
    match action {
        ScreenAction::Navigate(path) => Some(path),
        ScreenAction::ClearSuccess(seq) => {
            let banners = state.banners_mut();
            if banners.success_seq == seq {
                banners.success = None;
            }
            None
        }
        ScreenAction::ClearError(seq) => {
            let banners = state.banners_mut();
            if banners.error_seq == seq {
                banners.error = None;
            }
            None
        }
    }
}

/// Screens that can run a federated sign-in.
///
/// The provider flow spans a full-page redirect, so the screen that started it
/// is mounted again on return and resumes from `begin_federated`.
pub trait FederatedFlow: HasBanners {
    /// Mark the screen busy; `false` if it already is.
    fn begin_federated(&mut self) -> bool;

    fn federated_succeeded(&mut self) -> Scheduled<ScreenAction>;

    /// No federated sign-in was pending; become idle again.
    fn abandon(&mut self);

    fn fail(&mut self, err: &AuthError);
}
