//! REST call to the email generation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since generation is only
//! triggered from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses to one user-facing sentence; the typed
//! `GenerationError` keeps the detail for the console log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ComposeRequest, GenerateResponse, GeneratedEmail};

/// Message shown for any failed generation attempt.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate email. Please check your server connection.";

/// Errors produced by a generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response.
    #[error("generation request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("generation failed: status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("generation response parse failed: {0}")]
    Parse(String),

    /// The response decoded but carried no email text.
    #[error("generation response contained no email text")]
    EmptyResponse,

    /// Called outside the browser.
    #[error("generation not available on server")]
    Unavailable,
}

impl GenerationError {
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

/// Pick the generated text out of a decoded response.
///
/// # Errors
///
/// Returns `EmptyResponse` if none of the known fields holds text.
pub fn extract_generated(body: GenerateResponse) -> Result<GeneratedEmail, GenerationError> {
    body.into_content()
        .map(|content| GeneratedEmail { content })
        .ok_or(GenerationError::EmptyResponse)
}

/// Request a generated email via `POST {endpoint}` (normally `{base}/api/email`).
///
/// # Errors
///
/// Returns a `GenerationError` for transport failures, non-2xx statuses,
/// undecodable bodies, and responses without email text.
pub async fn generate_email(endpoint: &str, request: &ComposeRequest) -> Result<GeneratedEmail, GenerationError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| GenerationError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(GenerationError::Status(resp.status()));
        }
        let body: GenerateResponse = resp.json().await.map_err(|e| GenerationError::Parse(e.to_string()))?;
        extract_generated(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, request);
        Err(GenerationError::Unavailable)
    }
}
