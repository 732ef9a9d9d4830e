//! Floating contact button, hidden while an inline call-to-action is on
//! screen.

use leptos::prelude::*;

use crate::state::ui::FloatState;

/// Fixed-position contact button in the bottom corner.
#[component]
pub fn ContactFloat() -> impl IntoView {
    let float = expect_context::<RwSignal<FloatState>>();

    view! {
        <a
            id="contact-float"
            class="contact-float"
            href="https://wa.me/15550100200"
            target="_blank"
            rel="noopener"
            aria-label="Chat on WhatsApp"
            style=move || effects::nav::float_style(float.get().hidden)
        >
            <svg viewBox="0 0 24 24" width="22" height="22" aria-hidden="true">
                <path
                    fill="currentColor"
                    d="M4 4h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H8l-4 4V6a2 2 0 0 1 2-2z"
                ></path>
            </svg>
        </a>
    }
}
