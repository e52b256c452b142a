//! REST client for the hosted identity backend.
//!
//! Client-side (hydrate): identity toolkit calls via `gloo-net`, session cache
//! in `localStorage`, pending federated sign-in in `sessionStorage`.
//! Server-side (SSR): stubs returning `None`/error since identity only exists
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures carry an `{"error": {"message": ...}}` envelope. That
//! message is returned verbatim as `AuthError::message`; nothing here parses or
//! re-maps it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::types::SessionUser;
use crate::config::IdentityConfig;
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

/// Provider used for federated sign-in and sign-up.
pub const FEDERATED_PROVIDER_ID: &str = "google.com";

#[cfg(feature = "hydrate")]
const SESSION_CACHE_KEY: &str = "nora_identity_session";
#[cfg(feature = "hydrate")]
const PENDING_FEDERATED_KEY: &str = "nora_identity_pending_idp";

/// Failure reported by the identity backend (or the transport to it).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

/// The token service answers in `snake_case`, unlike the accounts API.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    user_id: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    #[serde(default)]
    email_verified: bool,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAuthUriResponse {
    auth_uri: String,
    session_id: String,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn provider_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| format!("identity request failed: {status}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_expires_in(raw: &str) -> Result<u64, AuthError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AuthError::new(format!("invalid token lifetime: {raw}")))
}

#[cfg(any(test, feature = "hydrate"))]
fn session_from_tokens(
    tokens: TokenResponse,
    now_ms: u64,
    email_verified: bool,
    federated: bool,
) -> Result<SessionUser, AuthError> {
    let lifetime_secs = parse_expires_in(&tokens.expires_in)?;
    Ok(SessionUser {
        user_id: tokens.local_id,
        email: tokens.email,
        email_verified,
        id_token: tokens.id_token,
        refresh_token: tokens.refresh_token,
        expires_at_ms: now_ms.saturating_add(lifetime_secs.saturating_mul(1000)),
        federated,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn refreshed_session(user: &SessionUser, refreshed: RefreshResponse, now_ms: u64) -> Result<SessionUser, AuthError> {
    if refreshed.user_id != user.user_id {
        return Err(AuthError::new("refreshed token belongs to a different user"));
    }
    let lifetime_secs = parse_expires_in(&refreshed.expires_in)?;
    Ok(SessionUser {
        id_token: refreshed.id_token,
        refresh_token: refreshed.refresh_token,
        expires_at_ms: now_ms.saturating_add(lifetime_secs.saturating_mul(1000)),
        ..user.clone()
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn email_verified_from_lookup(lookup: LookupResponse) -> Result<bool, AuthError> {
    lookup
        .users
        .first()
        .map(|user| user.email_verified)
        .ok_or_else(|| AuthError::new("USER_NOT_FOUND"))
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_form_body(refresh_token: &str) -> String {
    format!("grant_type=refresh_token&refresh_token={}", urlencoding::encode(refresh_token))
}

#[cfg(any(test, feature = "hydrate"))]
fn password_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password, "returnSecureToken": true })
}

#[cfg(any(test, feature = "hydrate"))]
fn verification_payload(id_token: &str) -> serde_json::Value {
    serde_json::json!({ "requestType": "VERIFY_EMAIL", "idToken": id_token })
}

#[cfg(any(test, feature = "hydrate"))]
fn create_auth_uri_payload(continue_uri: &str) -> serde_json::Value {
    serde_json::json!({ "providerId": FEDERATED_PROVIDER_ID, "continueUri": continue_uri })
}

#[cfg(any(test, feature = "hydrate"))]
fn idp_payload(request_uri: &str, session_id: &str) -> serde_json::Value {
    serde_json::json!({
        "requestUri": request_uri,
        "sessionId": session_id,
        "returnSecureToken": true,
        "returnIdpCredential": true,
    })
}

/// Query/fragment keys a provider adds when redirecting back to the app.
#[cfg(any(test, feature = "hydrate"))]
const PROVIDER_RESPONSE_PARAMS: [&str; 6] = ["code", "id_token", "access_token", "oauth_token", "oauth_verifier", "error"];

/// Whether `request_uri` is a provider redirect rather than an ordinary visit.
#[cfg(any(test, feature = "hydrate"))]
fn carries_provider_response(request_uri: &str) -> bool {
    let params = request_uri.split_once(['?', '#']).map_or("", |(_, rest)| rest);
    params
        .split(['&', '?', '#'])
        .filter_map(|pair| pair.split('=').next())
        .any(|key| PROVIDER_RESPONSE_PARAMS.contains(&key))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> AuthError {
    AuthError::new("not available on server")
}

#[cfg(feature = "hydrate")]
async fn read_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::new(provider_error_message(status, &body)));
    }
    resp.json::<T>().await.map_err(|e| AuthError::new(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(url: &str, payload: &serde_json::Value) -> Result<T, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| AuthError::new(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::new(e.to_string()))?;
    read_response(resp).await
}

/// Sign in with email + password via `accounts:signInWithPassword`.
///
/// # Errors
///
/// Returns the provider's error message (e.g. `INVALID_LOGIN_CREDENTIALS`).
pub async fn sign_in_with_password(config: &IdentityConfig, email: &str, password: &str) -> Result<SessionUser, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let tokens: TokenResponse =
            post_json(&config.accounts_endpoint("signInWithPassword"), &password_payload(email, password)).await?;
        let verified = lookup_email_verified(config, &tokens.id_token).await?;
        session_from_tokens(tokens, crate::util::schedule::now_ms(), verified, false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(unavailable())
    }
}

/// Create an account via `accounts:signUp`. New accounts start unverified.
///
/// # Errors
///
/// Returns the provider's error message (e.g. `EMAIL_EXISTS`).
pub async fn sign_up_with_password(config: &IdentityConfig, email: &str, password: &str) -> Result<SessionUser, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let tokens: TokenResponse =
            post_json(&config.accounts_endpoint("signUp"), &password_payload(email, password)).await?;
        session_from_tokens(tokens, crate::util::schedule::now_ms(), false, false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(unavailable())
    }
}

/// Read the current `emailVerified` flag via `accounts:lookup`.
///
/// # Errors
///
/// Returns the provider's error message, or `USER_NOT_FOUND` for an empty lookup.
pub async fn lookup_email_verified(config: &IdentityConfig, id_token: &str) -> Result<bool, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "idToken": id_token });
        let lookup: LookupResponse = post_json(&config.accounts_endpoint("lookup"), &payload).await?;
        email_verified_from_lookup(lookup)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id_token);
        Err(unavailable())
    }
}

/// Ask the provider to mail a verification link via `accounts:sendOobCode`.
///
/// # Errors
///
/// Returns the provider's error message (e.g. `TOO_MANY_ATTEMPTS_TRY_LATER`).
pub async fn send_verification_email(config: &IdentityConfig, id_token: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let _: serde_json::Value =
            post_json(&config.accounts_endpoint("sendOobCode"), &verification_payload(id_token)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id_token);
        Err(unavailable())
    }
}

/// Exchange the refresh token for a fresh id token and re-read verification.
///
/// # Errors
///
/// Returns an error when the refresh token is revoked or expired; callers treat
/// that as the end of the session.
pub async fn refresh_session(config: &IdentityConfig, user: &SessionUser) -> Result<SessionUser, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.token_endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(refresh_form_body(&user.refresh_token))
            .map_err(|e| AuthError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::new(e.to_string()))?;
        let refreshed: RefreshResponse = read_response(resp).await?;
        let mut next = refreshed_session(user, refreshed, crate::util::schedule::now_ms())?;
        if !next.federated {
            next.email_verified = lookup_email_verified(config, &next.id_token).await?;
        }
        Ok(next)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, user);
        Err(unavailable())
    }
}

/// Start a redirect-based federated sign-in via `accounts:createAuthUri`.
///
/// Remembers the provider session id for [`complete_federated`] and returns the
/// provider URL the browser must navigate to.
///
/// # Errors
///
/// Returns the provider's error message, or an error when the browser refuses
/// to store the pending sign-in.
pub async fn begin_federated(config: &IdentityConfig, continue_uri: &str) -> Result<String, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let started: CreateAuthUriResponse =
            post_json(&config.accounts_endpoint("createAuthUri"), &create_auth_uri_payload(continue_uri)).await?;
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or_else(|| AuthError::new("session storage is unavailable"))?;
        storage
            .set_item(PENDING_FEDERATED_KEY, &started.session_id)
            .map_err(|_| AuthError::new("could not remember the pending sign-in"))?;
        Ok(started.auth_uri)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, continue_uri);
        Err(unavailable())
    }
}

/// Finish a federated sign-in after the provider redirected back.
///
/// `request_uri` is the full URL the provider redirected to. Returns `Ok(None)`
/// when no federated sign-in is pending. A pending sign-in is dropped when the
/// URL carries no provider response (the visitor backed out of the provider).
/// Federated accounts count as verified.
///
/// # Errors
///
/// Returns the provider's error message.
pub async fn complete_federated(config: &IdentityConfig, request_uri: &str) -> Result<Option<SessionUser>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            return Ok(None);
        };
        let Some(session_id) = storage.get_item(PENDING_FEDERATED_KEY).ok().flatten() else {
            return Ok(None);
        };
        let _ = storage.remove_item(PENDING_FEDERATED_KEY);
        if !carries_provider_response(request_uri) {
            log::info!("pending federated sign-in abandoned");
            return Ok(None);
        }
        let tokens: TokenResponse =
            post_json(&config.accounts_endpoint("signInWithIdp"), &idp_payload(request_uri, &session_id)).await?;
        session_from_tokens(tokens, crate::util::schedule::now_ms(), true, true).map(Some)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request_uri);
        Ok(None)
    }
}

/// Read the cached session left by a previous visit.
pub fn load_cached_session() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(SESSION_CACHE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the active session so reloads stay signed in.
pub fn store_cached_session(user: &SessionUser) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(SESSION_CACHE_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

pub fn clear_cached_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(SESSION_CACHE_KEY);
        }
    }
}
