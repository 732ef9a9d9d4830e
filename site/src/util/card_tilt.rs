//! Pointer-tilt card wrapper shared by the why and package grids.

#[cfg(test)]
#[path = "card_tilt_test.rs"]
mod card_tilt_test;

use leptos::prelude::*;

use effects::tilt::{CARD, FEATURED};

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Inline style declaration for a transform value; empty transform means no
/// inline style at all, leaving the stylesheet in charge.
fn transform_style(transform: &str) -> String {
    if transform.is_empty() {
        String::new()
    } else {
        format!("transform: {transform}")
    }
}

/// A card that tips toward the pointer while hovered.
///
/// The featured variant rotates more gently and keeps its scale when the
/// pointer leaves.
#[component]
pub fn TiltCard(
    #[prop(into)] class: String,
    #[prop(optional)] featured: bool,
    children: Children,
) -> impl IntoView {
    let tilt = if featured { FEATURED } else { CARD };
    let style = RwSignal::new(transform_style(&tilt.resting()));

    let on_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(card) = ev
                    .current_target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                else {
                    return;
                };
                let rect = card.get_bounding_client_rect();
                let offset = effects::tilt::pointer_offset(
                    rect.width(),
                    rect.height(),
                    f64::from(ev.client_x()) - rect.left(),
                    f64::from(ev.client_y()) - rect.top(),
                );
                style.set(transform_style(&tilt.transform(offset)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_leave = move |_ev: leptos::ev::MouseEvent| {
        style.set(transform_style(&tilt.resting()));
    };

    view! {
        <div class=class style=move || style.get() on:mousemove=on_move on:mouseleave=on_leave>
            {children()}
        </div>
    }
}
