//! Fixed navbar: scrolled styling, mobile menu, active section link.

use leptos::prelude::*;

use crate::state::ui::{NavState, SectionId};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Inline style for one hamburger bar.
fn bar_style(index: usize, open: bool) -> String {
    format!(
        "transform: {}; opacity: {}",
        effects::nav::menu_bar_transform(index, open),
        effects::nav::menu_bar_opacity(index, open),
    )
}

/// Site navbar. Fixed to the top; takes its `scrolled` style past the
/// scroll threshold, collapses into a hamburger menu on small screens, and
/// highlights the link of the section currently in view.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let cb = Closure::<dyn FnMut()>::new(move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let scrolled = effects::nav::navbar_scrolled(window.scroll_y().unwrap_or(0.0));
                if nav.get_untracked().scrolled != scrolled {
                    nav.update(|n| n.scrolled = scrolled);
                }
            });
            if window
                .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
                .is_ok()
            {
                cb.forget();
            }
        });
    }

    view! {
        <nav class="navbar" class:scrolled=move || nav.get().scrolled>
            <div class="navbar__inner">
                <a href="#home" class="navbar__brand">
                    "Keystone"
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| nav.update(|n| n.menu_open = !n.menu_open)
                >
                    <span class="nav-toggle__bar" style=move || bar_style(0, nav.get().menu_open)></span>
                    <span class="nav-toggle__bar" style=move || bar_style(1, nav.get().menu_open)></span>
                    <span class="nav-toggle__bar" style=move || bar_style(2, nav.get().menu_open)></span>
                </button>
                <div class="nav-links" class:open=move || nav.get().menu_open>
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="nav-link"
                                    class:active=move || nav.get().active == Some(section)
                                    on:click=move |_| nav.update(|n| n.menu_open = false)
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
