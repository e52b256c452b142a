//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so endpoints are
//! baked in when the client is compiled (`NORA_*` variables). The same values
//! are compiled into the SSR build so both renders agree.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_SECURETOKEN_URL: &str = "https://securetoken.googleapis.com/v1";

/// Endpoints and credentials for the hosted identity backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub identity_url: String,
    pub securetoken_url: String,
}

impl IdentityConfig {
    /// URL for an `accounts:{method}` call, e.g. `signInWithPassword`.
    pub fn accounts_endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{method}?key={}", self.identity_url, self.api_key)
    }

    /// URL for exchanging a refresh token.
    pub fn token_endpoint(&self) -> String {
        format!("{}/token?key={}", self.securetoken_url, self.api_key)
    }
}

/// Typed client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the email generation backend. Empty means same origin.
    pub backend_base_url: String,
    pub identity: IdentityConfig,
}

impl ClientConfig {
    /// Read configuration captured at compile time.
    ///
    /// - `NORA_BACKEND_URL`: generation backend base URL (default: same origin)
    /// - `NORA_IDENTITY_API_KEY`: identity backend web API key
    /// - `NORA_IDENTITY_URL`: identity toolkit base URL override (emulators)
    /// - `NORA_SECURETOKEN_URL`: token service base URL override (emulators)
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("NORA_BACKEND_URL"),
            option_env!("NORA_IDENTITY_API_KEY"),
            option_env!("NORA_IDENTITY_URL"),
            option_env!("NORA_SECURETOKEN_URL"),
        )
    }

    pub fn from_values(
        backend_url: Option<&str>,
        api_key: Option<&str>,
        identity_url: Option<&str>,
        securetoken_url: Option<&str>,
    ) -> Self {
        Self {
            backend_base_url: normalize_base_url(backend_url, ""),
            identity: IdentityConfig {
                api_key: api_key.map(str::trim).unwrap_or_default().to_owned(),
                identity_url: normalize_base_url(identity_url, DEFAULT_IDENTITY_URL),
                securetoken_url: normalize_base_url(securetoken_url, DEFAULT_SECURETOKEN_URL),
            },
        }
    }

    /// Full URL of the email generation endpoint.
    pub fn email_endpoint(&self) -> String {
        format!("{}/api/email", self.backend_base_url)
    }
}

fn normalize_base_url(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value.trim_end_matches('/').to_owned(),
        None => default.to_owned(),
    }
}
