use super::*;
use crate::util::schedule::Timeline;
use std::time::Duration;

fn showing(text: &str) -> ResultState {
    let mut state = ResultState::default();
    state.show(GeneratedEmail { content: text.to_owned() });
    state
}

// =============================================================
// TextStats
// =============================================================

#[test]
fn stats_for_two_line_text() {
    assert_eq!(
        TextStats::of("Hello world\nSecond line"),
        TextStats { words: 4, characters: 23, lines: 2 }
    );
}

#[test]
fn stats_count_characters_not_bytes() {
    assert_eq!(TextStats::of("héllo").characters, 5);
}

#[test]
fn stats_split_on_single_spaces() {
    assert_eq!(TextStats::of("a  b").words, 3);
}

// =============================================================
// Copy / clear
// =============================================================

#[test]
fn copy_twice_keeps_text_and_acknowledges_both_times() {
    let mut state = showing("Dear Team,");
    let mut timeline = Timeline::default();

    let (first, task) = state.copy().unwrap();
    timeline.schedule(task);
    assert!(state.copied);
    let (second, task) = state.copy().unwrap();
    timeline.schedule(task);
    assert!(state.copied);

    assert_eq!(first, "Dear Team,");
    assert_eq!(second, "Dear Team,");
    assert_eq!(state.text(), Some("Dear Team,"));

    for action in timeline.advance(COPIED_DISPLAY) {
        state.apply(action);
    }
    assert!(!state.copied);
}

#[test]
fn second_copy_gets_its_own_full_window() {
    let mut state = showing("Dear Team,");
    let mut timeline = Timeline::default();

    let (_, task) = state.copy().unwrap();
    timeline.schedule(task);
    for action in timeline.advance(Duration::from_millis(1500)) {
        state.apply(action);
    }
    let (_, task) = state.copy().unwrap();
    timeline.schedule(task);

    for action in timeline.advance(Duration::from_millis(600)) {
        state.apply(action);
    }
    assert!(state.copied);

    for action in timeline.advance(Duration::from_millis(1400)) {
        state.apply(action);
    }
    assert!(!state.copied);
}

#[test]
fn timer_from_before_clear_does_not_end_a_new_copy() {
    let mut state = showing("first");
    let mut timeline = Timeline::default();
    let (_, task) = state.copy().unwrap();
    timeline.schedule(task);

    state.clear();
    state.show(GeneratedEmail { content: "second".to_owned() });
    timeline.advance(Duration::from_millis(1000));
    let (_, task) = state.copy().unwrap();
    timeline.schedule(task);

    for action in timeline.advance(Duration::from_millis(1000)) {
        state.apply(action);
    }
    assert!(state.copied);
}

#[test]
fn copy_without_text_does_nothing() {
    let mut state = ResultState::default();
    assert!(state.copy().is_none());
    assert!(!state.copied);
}

#[test]
fn clear_resets_text_and_draft() {
    let mut state = showing("Dear Team,");
    state.recipient = "boss@example.com".to_owned();
    state.subject = "Extension".to_owned();
    state.copied = true;
    state.clear();
    assert_eq!(state, ResultState::default());
}

#[test]
fn show_replaces_previous_email() {
    let mut state = showing("first");
    state.show(GeneratedEmail { content: "second".to_owned() });
    assert_eq!(state.text(), Some("second"));
}

// =============================================================
// Outbound draft
// =============================================================

#[test]
fn send_requires_recipient() {
    let mut state = showing("Dear Team,...");
    assert!(!state.can_send());
    assert_eq!(state.mailto(), None);

    state.recipient = "   ".to_owned();
    assert!(!state.can_send());

    state.recipient = "team@example.com".to_owned();
    assert!(state.can_send());
}

#[test]
fn send_requires_generated_text() {
    let state = ResultState { recipient: "team@example.com".to_owned(), ..ResultState::default() };
    assert!(!state.can_send());
}

#[test]
fn mailto_uses_recipient_subject_and_body() {
    let mut state = showing("Dear Team,\nThanks");
    state.recipient = "team@example.com".to_owned();
    state.subject = "Deadline".to_owned();
    assert_eq!(
        state.mailto().as_deref(),
        Some("mailto:team@example.com?subject=Deadline&body=Dear%20Team%2C%0AThanks")
    );
}
