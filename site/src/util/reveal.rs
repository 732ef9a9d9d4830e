//! Scroll-reveal wiring: `.reveal-up` elements gain `visible` the first
//! time they enter the viewport, staggered within their sibling group.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use effects::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
#[cfg(feature = "hydrate")]
use effects::reveal::RevealSet;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::Element;

#[cfg(feature = "hydrate")]
use crate::util::visibility::{self, ObserveOptions};

/// Observe every `.reveal-up` element in the document. Each reveals at most
/// once, delayed by its position among its parent's reveal group.
#[cfg(feature = "hydrate")]
pub fn wire_reveals() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".reveal-up") else {
        return;
    };

    let reveal_set = Rc::new(RefCell::new(RevealSet::new(nodes.length() as usize)));
    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let sibling_index = sibling_reveal_index(&element);
        let reveal_set = Rc::clone(&reveal_set);
        let target = element.clone();
        visibility::observe(
            &element,
            ObserveOptions {
                threshold: REVEAL_THRESHOLD,
                root_margin: Some(REVEAL_ROOT_MARGIN),
                once: true,
            },
            move |visible| {
                if !visible {
                    return;
                }
                let Some(delay_ms) = reveal_set
                    .borrow_mut()
                    .trigger(index as usize, sibling_index)
                else {
                    return;
                };
                let target = target.clone();
                Timeout::new(delay_ms, move || {
                    let _ = target.class_list().add_1("visible");
                })
                .forget();
            },
        );
    }
}

/// Position of `element` among its parent's `.reveal-up` descendants.
#[cfg(feature = "hydrate")]
fn sibling_reveal_index(element: &Element) -> u32 {
    let Some(parent) = element.parent_element() else {
        return 0;
    };
    let Ok(group) = parent.query_selector_all(".reveal-up") else {
        return 0;
    };
    for i in 0..group.length() {
        if let Some(node) = group.get(i)
            && node.dyn_ref::<Element>() == Some(element)
        {
            return i;
        }
    }
    0
}
