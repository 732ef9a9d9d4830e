//! Navbar scroll state, hamburger icon styling, active-section tracking,
//! and floating-button visibility.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::NAV_SCROLL_THRESHOLD;

/// Whether the navbar shows its scrolled style at `scroll_y`.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Inline transform for hamburger bar `index` (top to bottom). The outer
/// bars fold into an X while the menu is open.
#[must_use]
pub fn menu_bar_transform(index: usize, open: bool) -> &'static str {
    if !open {
        return "none";
    }
    match index {
        0 => "translateY(7px) rotate(45deg)",
        2 => "translateY(-7px) rotate(-45deg)",
        _ => "none",
    }
}

/// Inline opacity for hamburger bar `index`; the middle bar vanishes while
/// the menu is open.
#[must_use]
pub fn menu_bar_opacity(index: usize, open: bool) -> &'static str {
    if open && index == 1 { "0" } else { "1" }
}

/// Inline style for the floating contact button.
#[must_use]
pub fn float_style(hidden: bool) -> &'static str {
    if hidden {
        "opacity: 0; pointer-events: none"
    } else {
        "opacity: 1; pointer-events: auto"
    }
}

/// Tracks which page section currently owns the active nav link.
///
/// Applies the latest intersecting report: when two sections are partially
/// visible at once, whichever reported later wins. Non-intersecting reports
/// leave the current section in place, so scrolling out of every section
/// keeps the last one highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSection<T> {
    current: Option<T>,
}

impl<T> Default for ActiveSection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Copy + PartialEq> ActiveSection<T> {
    /// Record a visibility report for `section`. Returns true when the
    /// active section changed.
    pub fn observe(&mut self, section: T, intersecting: bool) -> bool {
        if !intersecting || self.current == Some(section) {
            return false;
        }
        self.current = Some(section);
        true
    }

    /// The section owning the active link, once any has intersected.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.current
    }
}

/// Visibility rule for the floating contact button: hidden while an inline
/// call-to-action is on screen.
///
/// Reports are last-wins across all observed call-to-actions, matching
/// per-element observer callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatVisibility {
    hidden: bool,
}

impl FloatVisibility {
    /// Record a visibility report for one call-to-action element. Returns
    /// true when the button's state changed.
    pub fn observe_cta(&mut self, intersecting: bool) -> bool {
        if self.hidden == intersecting {
            return false;
        }
        self.hidden = intersecting;
        true
    }

    /// Whether the floating button is hidden.
    #[must_use]
    pub fn hidden(&self) -> bool {
        self.hidden
    }
}
