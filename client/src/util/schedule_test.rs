use super::*;

#[test]
fn nothing_fires_before_due_time() {
    let mut timeline = Timeline::default();
    timeline.schedule(Scheduled::new(Duration::from_secs(2), "navigate"));
    assert!(timeline.advance(Duration::from_millis(1999)).is_empty());
    assert_eq!(timeline.pending(), 1);
    assert_eq!(timeline.advance(Duration::from_millis(1)), vec!["navigate"]);
    assert_eq!(timeline.pending(), 0);
}

#[test]
fn due_actions_fire_in_due_order() {
    let mut timeline = Timeline::default();
    timeline.schedule(Scheduled::new(Duration::from_secs(5), "late"));
    timeline.schedule(Scheduled::new(Duration::from_secs(2), "early"));
    timeline.schedule(Scheduled::new(Duration::from_secs(2), "early-second"));
    assert_eq!(timeline.advance(Duration::from_secs(10)), vec!["early", "early-second", "late"]);
}

#[test]
fn delays_are_relative_to_current_time() {
    let mut timeline = Timeline::default();
    timeline.advance(Duration::from_secs(3));
    timeline.schedule(Scheduled::new(Duration::from_secs(2), 1));
    assert!(timeline.advance(Duration::from_secs(1)).is_empty());
    assert_eq!(timeline.now(), Duration::from_secs(4));
    assert_eq!(timeline.advance(Duration::from_secs(1)), vec![1]);
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn run_after_is_inert_off_browser() {
    let fired = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = fired.clone();
    run_after(Duration::ZERO, move || flag.set(true));
    assert!(!fired.get());
}
