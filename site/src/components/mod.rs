//! Page sections and chrome components.

pub mod contact;
pub mod contact_float;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod package_cards;
pub mod particle_canvas;
pub mod stats_band;
pub mod why_cards;
