//! Pointer-driven card tilt: offset math and CSS transform strings.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::consts::{
    FEATURED_SCALE, TILT_FEATURED_MAX_DEG, TILT_LIFT_PX, TILT_MAX_DEG, TILT_PERSPECTIVE_PX,
};

/// Tilt parameters for one card family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltStyle {
    /// Peak rotation magnitude (deg) at a card corner.
    pub max_deg: f64,
    /// Scale kept at rest and while tilting, when the card has one.
    pub scale: Option<f64>,
}

/// Ordinary cards.
pub const CARD: TiltStyle = TiltStyle {
    max_deg: TILT_MAX_DEG,
    scale: None,
};

/// The featured package card: gentler rotation, never loses its scale.
pub const FEATURED: TiltStyle = TiltStyle {
    max_deg: TILT_FEATURED_MAX_DEG,
    scale: Some(FEATURED_SCALE),
};

/// Pointer offset from the card center, normalized so each axis reaches
/// -1 and 1 at the card edges. `local_x`/`local_y` are relative to the
/// card's top-left corner.
#[must_use]
pub fn pointer_offset(card_w: f64, card_h: f64, local_x: f64, local_y: f64) -> (f64, f64) {
    let half_w = card_w / 2.0;
    let half_h = card_h / 2.0;
    ((local_x - half_w) / half_w, (local_y - half_h) / half_h)
}

impl TiltStyle {
    /// Rotation angles `(rotate_x_deg, rotate_y_deg)` for a pointer offset.
    /// Vertical offset drives the X rotation, inverted so the card tips away
    /// from the pointer; horizontal offset drives the Y rotation.
    #[must_use]
    pub fn angles(&self, offset: (f64, f64)) -> (f64, f64) {
        let (dx, dy) = offset;
        (dy * -self.max_deg, dx * self.max_deg)
    }

    /// Transform while the pointer hovers at `offset`.
    #[must_use]
    pub fn transform(&self, offset: (f64, f64)) -> String {
        let (rx, ry) = self.angles(offset);
        let tilt = format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({rx:.2}deg) rotateY({ry:.2}deg) translateY({TILT_LIFT_PX}px)"
        );
        match self.scale {
            Some(scale) => format!("scale({scale}) {tilt}"),
            None => tilt,
        }
    }

    /// Transform once the pointer leaves.
    #[must_use]
    pub fn resting(&self) -> String {
        match self.scale {
            Some(scale) => format!("scale({scale})"),
            None => String::new(),
        }
    }
}
