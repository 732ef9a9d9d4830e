//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <span>"© 2026 Keystone Design & Build"</span>
                <a class="footer__link" href="#home">
                    "Back to top"
                </a>
            </div>
        </footer>
    }
}
