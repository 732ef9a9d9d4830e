//! Page chrome state shared through context.
//!
//! DESIGN
//! ======
//! The navbar and the observers that feed it live in different components,
//! so their shared state sits in context as two small copyable structs. The
//! decision logic (thresholds, last-wins rules) stays in the `effects`
//! crate; these types only carry the outcome to the views.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page sections addressable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Why,
    Packages,
    Stats,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 5] = [
        Self::Home,
        Self::Why,
        Self::Packages,
        Self::Stats,
        Self::Contact,
    ];

    /// The `id` attribute of the section element.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Why => "why",
            Self::Packages => "packages",
            Self::Stats => "stats",
            Self::Contact => "contact",
        }
    }

    /// The in-page anchor its nav link points at.
    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::Why => "#why",
            Self::Packages => "#packages",
            Self::Stats => "#stats",
            Self::Contact => "#contact",
        }
    }

    /// The nav link label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Why => "Why Us",
            Self::Packages => "Packages",
            Self::Stats => "Results",
            Self::Contact => "Contact",
        }
    }

    /// Look up a section by its `id` attribute.
    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.dom_id() == id)
    }
}

/// Navbar state: scrolled styling, mobile menu, active link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub active: Option<SectionId>,
}

/// Floating contact button state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloatState {
    pub hidden: bool,
}
