//! Stat counter animation: zero to target over a fixed duration.
//!
//! An explicit state machine advanced one tick at a time, so tests drive it
//! without timers. The browser side runs one tick per
//! [`COUNTER_TICK_MS`](crate::consts::COUNTER_TICK_MS) interval and drops the
//! interval once [`CounterAnim::is_done`] reports true.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

/// Animation phase for a single counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterPhase {
    /// Waiting to scroll into view.
    #[default]
    Idle,
    /// Ticking toward the target.
    Running,
    /// Clamped at the target; further ticks are no-ops.
    Done,
}

/// Counts from zero to a target in fixed per-tick increments.
#[derive(Clone, Copy, Debug)]
pub struct CounterAnim {
    target: f64,
    per_tick: f64,
    current: f64,
    phase: CounterPhase,
}

impl CounterAnim {
    /// Build an idle counter for `target`.
    #[must_use]
    pub fn new(target: u32) -> Self {
        let target = f64::from(target);
        Self {
            target,
            per_tick: target / (COUNTER_DURATION_MS / f64::from(COUNTER_TICK_MS)),
            current: 0.0,
            phase: CounterPhase::Idle,
        }
    }

    /// Begin ticking. Only an idle counter starts; repeat visibility reports
    /// never restart a running or finished animation.
    pub fn start(&mut self) {
        if self.phase == CounterPhase::Idle {
            self.phase = CounterPhase::Running;
        }
    }

    /// Advance one interval tick, clamping at the target.
    pub fn tick(&mut self) {
        if self.phase != CounterPhase::Running {
            return;
        }
        self.current += self.per_tick;
        if self.current >= self.target {
            self.current = self.target;
            self.phase = CounterPhase::Done;
        }
    }

    /// The value to display: the running value rounded down.
    #[must_use]
    pub fn display(&self) -> u32 {
        self.current.floor() as u32
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == CounterPhase::Done
    }
}
