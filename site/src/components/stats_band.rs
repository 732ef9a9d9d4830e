//! Stats band: counters that run up when scrolled into view.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use effects::consts::{COUNTER_THRESHOLD, COUNTER_TICK_MS};
#[cfg(feature = "hydrate")]
use effects::counter::CounterAnim;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use crate::util::visibility::{self, ObserveOptions};

/// One animated stat.
#[derive(Clone, Copy)]
struct StatDef {
    target: u32,
    suffix: &'static str,
    label: &'static str,
}

const STATS: &[StatDef] = &[
    StatDef {
        target: 250,
        suffix: "+",
        label: "Projects delivered",
    },
    StatDef {
        target: 12,
        suffix: "",
        label: "Years in business",
    },
    StatDef {
        target: 98,
        suffix: "%",
        label: "Handed over on schedule",
    },
    StatDef {
        target: 40,
        suffix: "+",
        label: "Specialists on staff",
    },
];

/// The stats band.
#[component]
pub fn StatsBand() -> impl IntoView {
    view! {
        <section id="stats" class="stats">
            <div class="stats__grid">
                {STATS
                    .iter()
                    .map(|stat| view! { <StatCounter stat=*stat/> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// A single stat number that counts up from zero the first time at least
/// half of it is visible.
#[component]
fn StatCounter(stat: StatDef) -> impl IntoView {
    let shown = RwSignal::new(0_u32);
    let num_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "hydrate")]
    {
        let done = RwSignal::new(false);
        let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let wired = RwSignal::new(false);

        let ticker_for_wiring = Rc::clone(&ticker);
        Effect::new(move || {
            let Some(el) = num_ref.get() else {
                return;
            };
            if wired.get_untracked() {
                return;
            }
            wired.set(true);

            let anim = Rc::new(RefCell::new(CounterAnim::new(stat.target)));
            let ticker = Rc::clone(&ticker_for_wiring);
            visibility::observe(
                &el,
                ObserveOptions {
                    threshold: COUNTER_THRESHOLD,
                    root_margin: None,
                    once: true,
                },
                move |visible| {
                    if !visible {
                        return;
                    }
                    anim.borrow_mut().start();
                    if ticker.borrow().is_some() {
                        return;
                    }
                    let anim = Rc::clone(&anim);
                    let interval = Interval::new(COUNTER_TICK_MS, move || {
                        let mut anim = anim.borrow_mut();
                        anim.tick();
                        shown.set(anim.display());
                        if anim.is_done() {
                            done.set(true);
                        }
                    });
                    *ticker.borrow_mut() = Some(interval);
                },
            );
        });

        // Drop the interval outside its own callback once the count lands.
        Effect::new(move || {
            if done.get() {
                ticker.borrow_mut().take();
            }
        });
    }

    view! {
        <div class="stat reveal-up">
            <span class="stat-num" node_ref=num_ref attr:data-target=stat.target.to_string()>
                {move || shown.get()}
            </span>
            <span class="stat__suffix">{stat.suffix}</span>
            <p class="stat__label">{stat.label}</p>
        </div>
    }
}
