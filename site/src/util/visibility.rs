//! Viewport visibility observation.
//!
//! One `IntersectionObserver` per element, reporting through a plain
//! `FnMut(bool)`. The reveal, counter, active-link, and float wiring all
//! come through here, so the decision logic behind each one stays driveable
//! with synthetic reports in native tests.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// How an element should be observed.
#[derive(Debug, Clone, Copy)]
pub struct ObserveOptions {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// Root margin, e.g. `"0px 0px -40px 0px"`.
    pub root_margin: Option<&'static str>,
    /// Stop observing after the first intersecting report.
    pub once: bool,
}

/// Observe `element`, reporting visibility changes to `on_change`.
///
/// The observer lives for the rest of the page, so the callback closure is
/// deliberately leaked; elements observed `once` are unobserved after their
/// first intersecting report.
#[cfg(feature = "hydrate")]
pub fn observe(element: &Element, options: ObserveOptions, mut on_change: impl FnMut(bool) + 'static) {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }

    let once = options.once;
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let visible = entry.is_intersecting();
                on_change(visible);
                if once && visible {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let Ok(observer) = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
    else {
        return;
    };
    observer.observe(element);
    cb.forget();
}
