//! Package section: three offer cards, the middle one featured.

use leptos::prelude::*;

use crate::util::card_tilt::TiltCard;

struct PackageDef {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PACKAGES: &[PackageDef] = &[
    PackageDef {
        name: "Refresh",
        price: "from $14k",
        blurb: "Cosmetic renovation of one or two rooms.",
        features: &[
            "Design consult and 3D preview",
            "Paint, floors, and fixtures",
            "Two-week typical turnaround",
        ],
        featured: false,
    },
    PackageDef {
        name: "Full Renovation",
        price: "from $68k",
        blurb: "Whole-home renovation managed end to end.",
        features: &[
            "Dedicated project architect",
            "All trades scheduled and supervised",
            "Weekly on-site progress reviews",
            "Fixed completion date in contract",
        ],
        featured: true,
    },
    PackageDef {
        name: "Custom Build",
        price: "by estimate",
        blurb: "Ground-up construction on your lot.",
        features: &[
            "Architecture and permitting included",
            "Structural ten-year warranty",
            "Open-book material pricing",
        ],
        featured: false,
    },
];

/// The package comparison grid.
#[component]
pub fn PackageCards() -> impl IntoView {
    view! {
        <section id="packages" class="packages">
            <div class="section-head reveal-up">
                <h2>"Pick the scope, keep the team"</h2>
                <p>"Every package comes with the same crews and the same warranty."</p>
            </div>
            <div class="packages__grid">
                {PACKAGES
                    .iter()
                    .map(|pkg| {
                        let class = if pkg.featured {
                            "pkg-card pkg-featured reveal-up"
                        } else {
                            "pkg-card reveal-up"
                        };
                        view! {
                            <TiltCard class=class featured=pkg.featured>
                                {pkg.featured.then(|| view! { <span class="pkg-card__badge">"Most popular"</span> })}
                                <h3>{pkg.name}</h3>
                                <p class="pkg-card__price">{pkg.price}</p>
                                <p class="pkg-card__blurb">{pkg.blurb}</p>
                                <ul class="pkg-card__features">
                                    {pkg.features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <a class="btn btn--outline" href="#contact">
                                    "Start a " {pkg.name} " project"
                                </a>
                            </TiltCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
