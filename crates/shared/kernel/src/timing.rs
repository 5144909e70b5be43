//! Time-driven primitives for behaviors.
//!
//! Behaviors never own timers. They record deadlines against the page clock (a [`Duration`]
//! since load) and poll them on every tick, so a host only has to forward frames.

use std::time::Duration;

/// Fires once after a quiet period. Every `schedule` pushes the deadline out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Restarts the quiet period, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            },
            _ => false,
        }
    }
}

/// Lets an action through at most once per interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throttle {
    interval: Duration,
    last: Option<Duration>,
}

impl Throttle {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    pub fn ready(&mut self, now: Duration) -> bool {
        let open = self.last.is_none_or(|last| now >= last + self.interval);
        if open {
            self.last = Some(now);
        }
        open
    }
}

/// Deferred actions ordered by due time.
///
/// Entries with the same due time come out in insertion order.
#[derive(Debug, Clone)]
pub struct Schedule<A> {
    entries: Vec<(Duration, A)>,
}

impl<A> Default for Schedule<A> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<A> Schedule<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(&mut self, due: Duration, action: A) {
        let index = self.entries.partition_point(|(at, _)| *at <= due);
        self.entries.insert(index, (due, action));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending action matching `predicate`.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&A) -> bool) {
        self.entries.retain(|(_, action)| !predicate(action));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes and returns the actions due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<A> {
        let split = self.entries.partition_point(|(at, _)| *at <= now);
        self.entries.drain(..split).map(|(_, action)| action).collect()
    }
}
