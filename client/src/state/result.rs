//! Result panel state: the displayed email, its stats, and the outbound draft.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use std::time::Duration;

use crate::net::types::GeneratedEmail;
use crate::util::mailto::mailto_uri;
use crate::util::schedule::Scheduled;

/// How long the "Copied" acknowledgment stays up.
pub const COPIED_DISPLAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultAction {
    /// End the acknowledgment started by the copy with this sequence number.
    ClearCopied(u64),
}

/// Live counts shown under the generated email.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub lines: usize,
}

impl TextStats {
    /// Words are separated by each single space or newline; empty pieces count.
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split([' ', '\n']).count(),
            characters: text.chars().count(),
            lines: text.split('\n').count(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultState {
    pub generated: Option<GeneratedEmail>,
    pub recipient: String,
    pub subject: String,
    pub copied: bool,
    /// Bumped by every copy; only the latest copy's timer ends the acknowledgment.
    copy_seq: u64,
}

impl ResultState {
    /// Replace whatever was displayed before.
    pub fn show(&mut self, email: GeneratedEmail) {
        self.generated = Some(email);
    }

    pub fn text(&self) -> Option<&str> {
        self.generated.as_ref().map(|g| g.content.as_str())
    }

    pub fn stats(&self) -> Option<TextStats> {
        self.text().map(TextStats::of)
    }

    /// Enter the copied state; returns the text for the clipboard and the
    /// timer that ends the acknowledgment.
    pub fn copy(&mut self) -> Option<(String, Scheduled<ResultAction>)> {
        let text = self.text()?.to_owned();
        self.copied = true;
        self.copy_seq += 1;
        Some((text, Scheduled::new(COPIED_DISPLAY, ResultAction::ClearCopied(self.copy_seq))))
    }

    pub fn apply(&mut self, action: ResultAction) {
        match action {
            ResultAction::ClearCopied(seq) => {
                if seq == self.copy_seq {
                    self.copied = false;
                }
            }
        }
    }

    /// Drop the email and the outbound draft.
    ///
    /// The copy sequence survives so timers from before the clear stay stale.
    pub fn clear(&mut self) {
        *self = Self { copy_seq: self.copy_seq, ..Self::default() };
    }

    pub fn can_send(&self) -> bool {
        self.text().is_some() && !self.recipient.trim().is_empty()
    }

    /// `mailto:` link for the current draft, if sending is possible.
    pub fn mailto(&self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        self.text().map(|body| mailto_uri(&self.recipient, &self.subject, body))
    }
}
