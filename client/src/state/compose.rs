//! Generation panel state: message, style selection, busy flag, last error.
//!
//! DESIGN
//! ======
//! `begin` is the only way to obtain a `ComposeRequest`, so an empty message
//! or an overlapping request can never reach the network.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use crate::net::api::GenerationError;
use crate::net::types::{ComposeRequest, GeneratedEmail, Mode, Tone};
use crate::util::validate::validate_message;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeState {
    pub message: String,
    pub tone: Tone,
    pub mode: Mode,
    /// A generation request is in flight.
    pub busy: bool,
    pub error: Option<String>,
}

impl ComposeState {
    /// Whether the generate control should be enabled.
    pub fn can_generate(&self) -> bool {
        !self.busy && validate_message(&self.message).is_ok()
    }

    /// Start a generation attempt, or `None` if the control is disabled.
    pub fn begin(&mut self) -> Option<ComposeRequest> {
        if !self.can_generate() {
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(ComposeRequest { message: self.message.clone(), tone: self.tone, mode: self.mode })
    }

    /// Record the outcome; returns the email to display on success.
    pub fn finish(&mut self, outcome: Result<GeneratedEmail, GenerationError>) -> Option<GeneratedEmail> {
        self.busy = false;
        match outcome {
            Ok(email) => {
                self.error = None;
                Some(email)
            }
            Err(err) => {
                self.error = Some(err.user_message().to_owned());
                None
            }
        }
    }

    /// Back to the initial form (used on logout).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
