//! Rendering: draws the particle field onto a 2D canvas context.
//!
//! This is the only module in the crate that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of
//! the field and produces pixels; it does not mutate any field state.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`; the
//! frame-loop caller decides what to do with a failure.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::LINK_RGB;
use crate::field::ParticleField;

/// Draw one frame: clear, connecting lines, then particles on top.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);
    draw_links(ctx, field);
    draw_particles(ctx, field)?;
    Ok(())
}

// =============================================================
// Layers
// =============================================================

fn draw_links(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    ctx.set_line_width(1.0);
    for link in field.links() {
        ctx.set_stroke_style_str(&format!("rgba({LINK_RGB}, {:.3})", link.alpha));
        ctx.begin_path();
        ctx.move_to(link.x1, link.y1);
        ctx.line_to(link.x2, link.y2);
        ctx.stroke();
    }
}

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    for p in &field.particles {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.radius, 0.0, 2.0 * PI)?;
        ctx.set_fill_style_str(p.color);
        ctx.set_global_alpha(p.alpha);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}
