//! Frame-sampled numeric tweens keyed by element.

use dpi_domain::dom::ElementId;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress in `0.0..=1.0` onto the curve. Both curves are monotonic.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Interpolation from `from` to `to` starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub const fn linear(from: f64, to: f64, start: Duration, duration: Duration) -> Self {
        Self { from, to, start, duration, easing: Easing::Linear }
    }

    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Exactly `to` once the duration has elapsed.
    #[must_use]
    pub fn value_at(&self, now: Duration) -> f64 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.easing.apply(p).mul_add(self.to - self.from, self.from)
    }

    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// One sampled value.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub target: ElementId,
    pub value: f64,
    pub done: bool,
}

/// Owns at most one tween per element.
///
/// A target can be started once for the driver's lifetime. Starting it again, even after it
/// finished or was stopped, is refused.
#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    running: BTreeMap<ElementId, Tween>,
    started: BTreeSet<ElementId>,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when `target` was already started.
    pub fn start(&mut self, target: ElementId, tween: Tween) -> bool {
        if !self.started.insert(target.clone()) {
            return false;
        }
        self.running.insert(target, tween);
        true
    }

    /// Stops a running tween without emitting a final frame. No-op when idle.
    pub fn stop(&mut self, target: &ElementId) {
        self.running.remove(target);
    }

    #[must_use]
    pub fn is_running(&self, target: &ElementId) -> bool {
        self.running.contains_key(target)
    }

    #[must_use]
    pub fn has_started(&self, target: &ElementId) -> bool {
        self.started.contains(target)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Samples every running tween. Finished tweens yield a final `done` frame and are dropped.
    pub fn sample(&mut self, now: Duration) -> Vec<Frame> {
        let frames: Vec<Frame> = self
            .running
            .iter()
            .map(|(target, tween)| Frame {
                target: target.clone(),
                value: tween.value_at(now),
                done: tween.is_finished(now),
            })
            .collect();
        self.running.retain(|_, tween| !tween.is_finished(now));
        frames
    }
}
