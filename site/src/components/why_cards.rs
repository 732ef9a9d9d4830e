//! "Why us" section: a grid of tilt cards.

use leptos::prelude::*;

use crate::util::card_tilt::TiltCard;

const WHY_CARDS: &[(&str, &str)] = &[
    (
        "Licensed crews only",
        "Every trade on site is licensed and insured, and stays with your \
         project from demolition to handover.",
    ),
    (
        "Fixed, transparent pricing",
        "One itemized quote before work starts. Change orders are priced and \
         signed before anything changes.",
    ),
    (
        "Ten-year warranty",
        "Structural work is covered for a decade, with an annual check-in \
         visit for the first two years.",
    ),
];

/// The "why choose us" card grid.
#[component]
pub fn WhyCards() -> impl IntoView {
    view! {
        <section id="why" class="why">
            <div class="section-head reveal-up">
                <h2>"Why homeowners choose Keystone"</h2>
                <p>"The three promises every project is built on."</p>
            </div>
            <div class="why__grid">
                {WHY_CARDS
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <TiltCard class="why-card reveal-up">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </TiltCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
