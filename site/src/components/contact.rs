//! Contact section with the main call-to-action.

use leptos::prelude::*;

/// Closing call-to-action section.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="contact__inner reveal-up">
                <h2>"Tell us about your project"</h2>
                <p>
                    "Send a few photos and your rough goals. You get a ballpark
                    range the same day and a fixed quote after one site visit."
                </p>
                <a
                    id="main-cta"
                    class="btn btn--primary contact__cta"
                    href="https://wa.me/15550100200"
                    target="_blank"
                    rel="noopener"
                >
                    "Chat on WhatsApp"
                </a>
            </div>
        </section>
    }
}
