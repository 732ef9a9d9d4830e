//! Browser wiring helpers shared across components.

pub mod card_tilt;
pub mod reveal;
pub mod visibility;
