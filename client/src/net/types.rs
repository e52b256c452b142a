//! Shared wire-protocol DTOs for the generation backend and the session user.
//!
//! DESIGN
//! ======
//! Style enums serialize as the lowercase strings the backend expects so the
//! request body is built straight from typed values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Voice the generated email should take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Persuasive,
    Apologetic,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Friendly, Tone::Persuasive, Tone::Apologetic];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Persuasive => "Persuasive",
            Tone::Apologetic => "Apologetic",
        }
    }
}

/// Writing style of the generated email.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Formal,
    Casual,
    Concise,
    Detailed,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Formal, Mode::Casual, Mode::Concise, Mode::Detailed];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Formal => "Formal",
            Mode::Casual => "Casual",
            Mode::Concise => "Concise",
            Mode::Detailed => "Detailed",
        }
    }
}

/// Body of `POST /api/email`. Built once per attempt and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComposeRequest {
    pub message: String,
    pub tone: Tone,
    pub mode: Mode,
}

/// Response of `POST /api/email`.
///
/// Backends disagree on the field name, so all three known names are accepted.
/// Values are kept untyped so a non-string field is skipped instead of failing
/// the whole decode.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub email: Option<serde_json::Value>,
    #[serde(default, rename = "generatedEmail")]
    pub generated_email: Option<serde_json::Value>,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

impl GenerateResponse {
    /// First non-empty string among `email`, `generatedEmail`, `content`.
    pub fn into_content(self) -> Option<String> {
        [self.email, self.generated_email, self.content]
            .into_iter()
            .flatten()
            .find_map(|value| match value {
                serde_json::Value::String(text) if !text.is_empty() => Some(text),
                _ => None,
            })
    }
}

/// Email text returned by the generation backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedEmail {
    pub content: String,
}

/// Signed-in user as cached by the identity client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-assigned account id.
    pub user_id: String,
    pub email: Option<String>,
    pub email_verified: bool,
    /// Short-lived bearer token for identity calls.
    pub id_token: String,
    pub refresh_token: String,
    /// Wall-clock expiry of `id_token` in Unix milliseconds.
    pub expires_at_ms: u64,
    /// Signed in through an external provider rather than a password.
    #[serde(default)]
    pub federated: bool,
}

/// Refresh a little early so a token never expires mid-request.
const TOKEN_EXPIRY_SKEW_MS: u64 = 60_000;

impl SessionUser {
    pub fn token_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_add(TOKEN_EXPIRY_SKEW_MS) >= self.expires_at_ms
    }
}
