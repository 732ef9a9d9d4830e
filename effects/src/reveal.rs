//! One-shot reveal latching and sibling stagger timing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEAL_STAGGER_MS;

/// Delay (ms) before the `sibling_index`-th reveal element in its group
/// becomes visible.
#[must_use]
pub fn stagger_delay_ms(sibling_index: u32) -> u32 {
    sibling_index * REVEAL_STAGGER_MS
}

/// Tracks which reveal-tagged elements have fired.
///
/// Latches each element at most once; re-entering the viewport never
/// retriggers a reveal.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    fired: Vec<bool>,
}

impl RevealSet {
    /// Track `count` elements, none fired yet.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            fired: vec![false; count],
        }
    }

    /// Report that element `index` became visible as the `sibling_index`-th
    /// reveal in its group. The first report returns the stagger delay to
    /// apply; repeats and unknown indices return `None`.
    pub fn trigger(&mut self, index: usize, sibling_index: u32) -> Option<u32> {
        let slot = self.fired.get_mut(index)?;
        if *slot {
            return None;
        }
        *slot = true;
        Some(stagger_delay_ms(sibling_index))
    }

    /// Whether element `index` has already revealed.
    #[must_use]
    pub fn fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    /// Number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fired.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}
