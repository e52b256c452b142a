use super::*;
use serde_json::json;

#[test]
fn extract_generated_uses_content_fallback() {
    let body: GenerateResponse = serde_json::from_value(json!({ "content": "Dear Team,..." })).unwrap();
    assert_eq!(
        extract_generated(body),
        Ok(GeneratedEmail { content: "Dear Team,...".to_owned() })
    );
}

#[test]
fn extract_generated_rejects_response_without_text() {
    let body: GenerateResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(extract_generated(body), Err(GenerationError::EmptyResponse));
}

#[test]
fn every_generation_error_shows_the_same_message() {
    let errors = [
        GenerationError::Transport("offline".to_owned()),
        GenerationError::Status(502),
        GenerationError::Parse("expected value".to_owned()),
        GenerationError::EmptyResponse,
        GenerationError::Unavailable,
    ];
    for err in errors {
        assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);
    }
}

#[test]
fn status_error_keeps_detail_for_logging() {
    assert_eq!(GenerationError::Status(503).to_string(), "generation failed: status 503");
}
