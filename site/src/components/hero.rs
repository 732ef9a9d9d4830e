//! Hero section: headline with shimmering gradient text, primary
//! call-to-action, and the particle canvas behind it all.

use leptos::prelude::*;

use crate::components::particle_canvas::ParticleCanvas;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use effects::consts::{SHIMMER_HOLD_MS, SHIMMER_PERIOD_MS};
#[cfg(feature = "hydrate")]
use effects::timing::Shimmer;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "hydrate")]
use js_sys::Date;

/// Hero section with the animated headline.
///
/// On hydration the headline locks to full opacity with its entrance
/// animation cleared, then the gradient spans pulse brighter once per
/// shimmer period.
#[component]
pub fn Hero() -> impl IntoView {
    let headline_style = RwSignal::new(String::new());
    let shimmer_filter = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            headline_style.set("opacity: 1; animation: none".to_owned());

            let shimmer = Rc::new(RefCell::new(Shimmer::new(Date::now())));
            Interval::new(SHIMMER_PERIOD_MS, move || {
                if shimmer.borrow_mut().advance(Date::now()) {
                    shimmer_filter.set(shimmer.borrow().css_filter().to_owned());
                }
                let shimmer = Rc::clone(&shimmer);
                Timeout::new(SHIMMER_HOLD_MS, move || {
                    if shimmer.borrow_mut().advance(Date::now()) {
                        shimmer_filter.set(shimmer.borrow().css_filter().to_owned());
                    }
                })
                .forget();
            })
            .forget();
        });
    }

    let gradient_style = move || {
        let filter = shimmer_filter.get();
        if filter.is_empty() {
            String::new()
        } else {
            format!("filter: {filter}")
        }
    };

    view! {
        <section id="home" class="hero">
            <ParticleCanvas/>
            <div class="hero__inner">
                <h1 class="hero-headline" style=move || headline_style.get()>
                    "Spaces that " <span class="text-gradient" style=gradient_style>"feel like home"</span>
                    ", delivered " <span class="text-gradient-blue" style=gradient_style>"on time"</span> "."
                </h1>
                <p class="hero__subtitle reveal-up">
                    "Keystone is a design-and-build studio for people who want one
                    accountable team from first sketch to final walkthrough."
                </p>
                <div class="hero__actions reveal-up">
                    <a
                        id="hero-cta"
                        class="btn btn--primary"
                        href="https://wa.me/15550100200"
                        target="_blank"
                        rel="noopener"
                    >
                        "Chat on WhatsApp"
                    </a>
                    <a class="btn btn--ghost" href="#packages">
                        "See packages"
                    </a>
                </div>
            </div>
        </section>
    }
}
