//! Landing page: section assembly plus document-wide effect wiring.

use leptos::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::contact_float::ContactFloat;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::package_cards::PackageCards;
use crate::components::stats_band::StatsBand;
use crate::components::why_cards::WhyCards;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use effects::consts::{CTA_THRESHOLD, SECTION_THRESHOLD};
#[cfg(feature = "hydrate")]
use effects::nav::{ActiveSection, FloatVisibility};

#[cfg(feature = "hydrate")]
use crate::state::ui::{FloatState, NavState, SectionId};
#[cfg(feature = "hydrate")]
use crate::util::reveal::wire_reveals;
#[cfg(feature = "hydrate")]
use crate::util::visibility::{self, ObserveOptions};

/// The single-page marketing site.
///
/// Document-level behaviors (reveals, active nav link, float visibility)
/// wire up in one effect after hydration, once the sections exist in the
/// DOM.
#[component]
pub fn LandingPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let nav = expect_context::<RwSignal<NavState>>();
        let float = expect_context::<RwSignal<FloatState>>();
        Effect::new(move || {
            wire_reveals();
            wire_active_sections(nav);
            wire_float_visibility(float);
        });
    }

    view! {
        <Navbar/>
        <main>
            <Hero/>
            <WhyCards/>
            <PackageCards/>
            <StatsBand/>
            <ContactSection/>
        </main>
        <ContactFloat/>
        <Footer/>
    }
}

/// Observe every section and keep the nav highlight on the one that most
/// recently reported itself visible.
#[cfg(feature = "hydrate")]
fn wire_active_sections(nav: RwSignal<NavState>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let tracker = Rc::new(RefCell::new(ActiveSection::default()));
    for section in SectionId::ALL {
        let Some(element) = document.get_element_by_id(section.dom_id()) else {
            continue;
        };
        let tracker = Rc::clone(&tracker);
        visibility::observe(
            &element,
            ObserveOptions {
                threshold: SECTION_THRESHOLD,
                root_margin: None,
                once: false,
            },
            move |visible| {
                if tracker.borrow_mut().observe(section, visible) {
                    let current = tracker.borrow().current();
                    nav.update(|n| n.active = current);
                }
            },
        );
    }
}

/// Hide the floating button while either inline call-to-action is visible.
#[cfg(feature = "hydrate")]
fn wire_float_visibility(float: RwSignal<FloatState>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let rule = Rc::new(RefCell::new(FloatVisibility::default()));
    for id in ["hero-cta", "main-cta"] {
        let Some(element) = document.get_element_by_id(id) else {
            continue;
        };
        let rule = Rc::clone(&rule);
        visibility::observe(
            &element,
            ObserveOptions {
                threshold: CTA_THRESHOLD,
                root_margin: None,
                once: false,
            },
            move |visible| {
                if rule.borrow_mut().observe_cta(visible) {
                    let hidden = rule.borrow().hidden();
                    float.update(|f| f.hidden = hidden);
                }
            },
        );
    }
}
