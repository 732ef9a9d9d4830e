#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- pointer_offset ---

#[test]
fn offset_at_center_is_zero() {
    let (dx, dy) = pointer_offset(300.0, 200.0, 150.0, 100.0);
    assert!(approx_eq(dx, 0.0));
    assert!(approx_eq(dy, 0.0));
}

#[test]
fn offset_at_bottom_right_corner_is_one_one() {
    let (dx, dy) = pointer_offset(300.0, 200.0, 300.0, 200.0);
    assert!(approx_eq(dx, 1.0));
    assert!(approx_eq(dy, 1.0));
}

#[test]
fn offset_at_top_left_corner_is_negative_one() {
    let (dx, dy) = pointer_offset(300.0, 200.0, 0.0, 0.0);
    assert!(approx_eq(dx, -1.0));
    assert!(approx_eq(dy, -1.0));
}

#[test]
fn offset_scales_linearly_inside_the_card() {
    let (dx, dy) = pointer_offset(400.0, 400.0, 300.0, 100.0);
    assert!(approx_eq(dx, 0.5));
    assert!(approx_eq(dy, -0.5));
}

// --- angles ---

#[test]
fn angles_at_center_are_zero() {
    let (rx, ry) = CARD.angles((0.0, 0.0));
    assert_eq!(rx, 0.0);
    assert_eq!(ry, 0.0);
}

#[test]
fn ordinary_card_peaks_at_six_degrees() {
    let (rx, ry) = CARD.angles((1.0, 1.0));
    assert!(approx_eq(rx, -6.0));
    assert!(approx_eq(ry, 6.0));
}

#[test]
fn featured_card_peaks_at_five_degrees() {
    let (rx, ry) = FEATURED.angles((1.0, 1.0));
    assert!(approx_eq(rx, -5.0));
    assert!(approx_eq(ry, 5.0));
}

#[test]
fn vertical_offset_tips_the_card_away() {
    // Pointer below center tips the top toward the viewer.
    let (rx, _) = CARD.angles((0.0, 0.5));
    assert!(rx < 0.0);
    let (rx, _) = CARD.angles((0.0, -0.5));
    assert!(rx > 0.0);
}

// --- transform strings ---

#[test]
fn ordinary_transform_renders_all_parts() {
    let t = CARD.transform((0.5, 0.5));
    assert_eq!(
        t,
        "perspective(800px) rotateX(-3.00deg) rotateY(3.00deg) translateY(-8px)"
    );
}

#[test]
fn featured_transform_keeps_scale_prefix() {
    let t = FEATURED.transform((1.0, 1.0));
    assert_eq!(
        t,
        "scale(1.04) perspective(800px) rotateX(-5.00deg) rotateY(5.00deg) translateY(-8px)"
    );
}

#[test]
fn ordinary_resting_transform_is_empty() {
    assert_eq!(CARD.resting(), "");
}

#[test]
fn featured_resting_transform_keeps_scale() {
    assert_eq!(FEATURED.resting(), "scale(1.04)");
}
