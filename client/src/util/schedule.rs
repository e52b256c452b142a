//! Delayed UI transitions ("after D, do X").
//!
//! DESIGN
//! ======
//! State machines never start timers themselves. They return `Scheduled`
//! values; pages hand those to [`run_after`] in the browser, and tests feed
//! them to a [`Timeline`] and advance virtual time.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::time::Duration;

/// An action to apply once `after` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled<A> {
    pub after: Duration,
    pub action: A,
}

impl<A> Scheduled<A> {
    pub fn new(after: Duration, action: A) -> Self {
        Self { after, action }
    }
}

/// Virtual clock holding scheduled actions until their due time.
#[derive(Debug)]
pub struct Timeline<A> {
    now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, A)>,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self { now: Duration::ZERO, seq: 0, pending: Vec::new() }
    }
}

impl<A> Timeline<A> {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, task: Scheduled<A>) {
        self.pending.push((self.now + task.after, self.seq, task.action));
        self.seq += 1;
    }

    /// Move the clock forward and return every action that came due, ordered
    /// by due time and then by scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<A> {
        self.now += by;
        let now = self.now;
        let (mut due, waiting): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|(at, _, _)| *at <= now);
        self.pending = waiting;
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, action)| action).collect()
    }
}

/// Run `task` once after `delay` on the browser event loop.
///
/// Outside the browser this is a no-op; timers only matter after hydration.
pub fn run_after(delay: Duration, task: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, task);
    }
}

/// Wall-clock time in Unix milliseconds.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }
}
