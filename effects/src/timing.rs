//! Wall-clock driven helpers: resize debounce and the headline shimmer.
//!
//! Both take the current time as a parameter instead of reading a clock, so
//! tests advance virtual time.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use crate::consts::{SHIMMER_FILTER, SHIMMER_HOLD_MS, SHIMMER_PERIOD_MS};

/// Collapses a burst of events into one action after a settling delay.
///
/// Each [`poke`](Self::poke) pushes the deadline out; [`fire`](Self::fire)
/// succeeds only once the latest deadline has passed, then clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Debouncer {
    deadline_ms: Option<f64>,
}

impl Debouncer {
    /// Record an event at `now_ms`; returns the new deadline.
    pub fn poke(&mut self, now_ms: f64, delay_ms: f64) -> f64 {
        let deadline = now_ms + delay_ms;
        self.deadline_ms = Some(deadline);
        deadline
    }

    /// Attempt the action at `now_ms`. True exactly when a deadline is set
    /// and has passed; the debouncer then rests until the next poke.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Whether an action is scheduled.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

/// Phase of the headline brightness pulse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShimmerPhase {
    /// No filter applied.
    #[default]
    Rest,
    /// Brightness filter applied.
    Bright,
}

/// Periodic brightness pulse: bright for a short hold window once per
/// period, resting otherwise.
///
/// The first pulse lands one full period after construction. The pulse
/// anchor advances in whole periods, so the cadence never drifts by the
/// hold time.
#[derive(Debug, Clone, Copy)]
pub struct Shimmer {
    next_pulse_ms: f64,
    bright_until_ms: Option<f64>,
}

impl Shimmer {
    /// Start a resting shimmer at `now_ms`.
    #[must_use]
    pub fn new(now_ms: f64) -> Self {
        Self {
            next_pulse_ms: now_ms + f64::from(SHIMMER_PERIOD_MS),
            bright_until_ms: None,
        }
    }

    /// Advance to `now_ms`. Returns true when the phase changed.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let mut changed = false;
        if let Some(until) = self.bright_until_ms
            && now_ms >= until
        {
            self.bright_until_ms = None;
            changed = true;
        }
        if now_ms >= self.next_pulse_ms {
            self.bright_until_ms = Some(now_ms + f64::from(SHIMMER_HOLD_MS));
            while now_ms >= self.next_pulse_ms {
                self.next_pulse_ms += f64::from(SHIMMER_PERIOD_MS);
            }
            changed = true;
        }
        changed
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ShimmerPhase {
        if self.bright_until_ms.is_some() {
            ShimmerPhase::Bright
        } else {
            ShimmerPhase::Rest
        }
    }

    /// CSS filter value for the current phase; empty at rest.
    #[must_use]
    pub fn css_filter(&self) -> &'static str {
        match self.phase() {
            ShimmerPhase::Bright => SHIMMER_FILTER,
            ShimmerPhase::Rest => "",
        }
    }
}
