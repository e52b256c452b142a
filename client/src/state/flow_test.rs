//! End-to-end generate → display → send flow over the pure state models.

use serde_json::json;

use super::compose::ComposeState;
use super::result::ResultState;
use crate::net::api::{GENERATION_FAILED_MESSAGE, GenerationError, extract_generated};
use crate::net::types::{GenerateResponse, GeneratedEmail, Mode, Tone};

#[test]
fn deadline_extension_scenario() {
    let mut compose = ComposeState {
        message: "Ask for a deadline extension".to_owned(),
        tone: Tone::Apologetic,
        mode: Mode::Concise,
        ..ComposeState::default()
    };
    let mut result = ResultState::default();

    let request = compose.begin().unwrap();
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "message": "Ask for a deadline extension", "tone": "apologetic", "mode": "concise" })
    );

    let body: GenerateResponse = serde_json::from_value(json!({ "content": "Dear Team,..." })).unwrap();
    if let Some(email) = compose.finish(extract_generated(body)) {
        result.show(email);
    }

    assert_eq!(result.text(), Some("Dear Team,..."));
    assert!(!result.can_send());
    result.recipient = "team@example.com".to_owned();
    assert!(result.can_send());
}

#[test]
fn failed_generation_keeps_previous_email() {
    let mut compose = ComposeState { message: "hello".to_owned(), ..ComposeState::default() };
    let mut result = ResultState::default();
    result.show(GeneratedEmail { content: "earlier draft".to_owned() });

    compose.begin().unwrap();
    if let Some(email) = compose.finish(Err(GenerationError::Transport("offline".to_owned()))) {
        result.show(email);
    }

    assert_eq!(result.text(), Some("earlier draft"));
    assert_eq!(compose.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
}

#[test]
fn response_without_text_is_a_failure_not_a_blank_email() {
    let mut compose = ComposeState { message: "hello".to_owned(), ..ComposeState::default() };
    let mut result = ResultState::default();

    compose.begin().unwrap();
    let body: GenerateResponse = serde_json::from_value(json!({ "email": null })).unwrap();
    if let Some(email) = compose.finish(extract_generated(body)) {
        result.show(email);
    }

    assert_eq!(result.text(), None);
    assert_eq!(compose.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
}
