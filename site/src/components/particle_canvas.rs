//! Canvas host for the hero particle background.
//!
//! ARCHITECTURE
//! ============
//! `effects::field` owns the particle math and `effects::render` owns the
//! context calls; this component owns the browser loop. Each animation frame
//! steps the field once and draws it. Window resizes funnel through a
//! debouncer so only the last resize in a burst regenerates the field, sized
//! to the viewport width and the enclosing section's height.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use effects::consts::RESIZE_DEBOUNCE_MS;
#[cfg(feature = "hydrate")]
use effects::field::ParticleField;
#[cfg(feature = "hydrate")]
use effects::timing::Debouncer;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use js_sys::Date;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Drawing surface extent: viewport width by enclosing section height.
#[cfg(feature = "hydrate")]
fn surface_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = canvas
        .closest("section")
        .ok()
        .flatten()
        .and_then(|s| s.dyn_into::<web_sys::HtmlElement>().ok())
        .map_or(0.0, |s| f64::from(s.offset_height()));
    (width, height)
}

#[cfg(feature = "hydrate")]
fn apply_size(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

#[cfg(feature = "hydrate")]
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Schedule the next animation frame, or tear the loop down if the window
/// is gone or scheduling fails.
#[cfg(feature = "hydrate")]
fn schedule_frame(holder: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(window) = web_sys::window() else {
        holder.borrow_mut().take();
        return;
    };
    let scheduled = {
        let holder_ref = holder.borrow();
        match holder_ref.as_ref() {
            Some(cb) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .is_ok(),
            None => true,
        }
    };
    if !scheduled {
        holder.borrow_mut().take();
    }
}

/// Start the self-rescheduling frame loop: step the field, draw, repeat.
#[cfg(feature = "hydrate")]
fn start_frame_loop(ctx: CanvasRenderingContext2d, field: Rc<RefCell<ParticleField>>) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);

    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        {
            let mut field = field.borrow_mut();
            field.step();
            if let Err(err) = effects::render::draw(&ctx, &field) {
                log::error!("particle draw failed, stopping the loop: {err:?}");
                holder_for_cb.borrow_mut().take();
                return;
            }
        }
        schedule_frame(&holder_for_cb);
    }) as Box<dyn FnMut(f64)>);

    *holder.borrow_mut() = Some(cb);
    schedule_frame(&holder);
}

/// Regenerate the field for the current surface after resizes settle.
#[cfg(feature = "hydrate")]
fn wire_resize(canvas: HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let debouncer = Rc::new(RefCell::new(Debouncer::default()));
    let settle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let cb = Closure::<dyn FnMut()>::new(move || {
        debouncer
            .borrow_mut()
            .poke(Date::now(), f64::from(RESIZE_DEBOUNCE_MS));

        let canvas = canvas.clone();
        let field = Rc::clone(&field);
        let debouncer = Rc::clone(&debouncer);
        let settle_inner = Rc::clone(&settle);
        let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            settle_inner.borrow_mut().take();
            if !debouncer.borrow_mut().fire(Date::now()) {
                return;
            }
            let (width, height) = surface_size(&canvas);
            apply_size(&canvas, width, height);
            field
                .borrow_mut()
                .resize_seeded(width, height, Date::now().to_bits());
        });
        // Replacing the handle cancels the previous pending timeout.
        *settle.borrow_mut() = Some(timeout);
    });
    if window
        .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

/// Hero particle background.
///
/// Renders an empty canvas on the server; hydration sizes it to the hero
/// section, spawns the particle field, and starts the frame loop.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let started = RwSignal::new(false);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.get_untracked() {
                return;
            }
            started.set(true);

            let Some(ctx) = context_2d(&canvas) else {
                return;
            };

            let (width, height) = surface_size(&canvas);
            apply_size(&canvas, width, height);
            let field = Rc::new(RefCell::new(ParticleField::seeded(
                width,
                height,
                Date::now().to_bits(),
            )));

            start_frame_loop(ctx, Rc::clone(&field));
            wire_resize(canvas.clone(), field);
        });
    }

    view! { <canvas node_ref=canvas_ref class="hero__particles" width="1440" height="640"></canvas> }
}
