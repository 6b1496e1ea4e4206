//! Literature survey cards shown a few at a time.
//!
//! The number of cards in view follows the window width and the arrows stop at
//! both ends. Autoplay walks forward and starts over from the first card.

use crate::shared::autoplay::AutoplayTicker;
use crate::shared::icons::icon;
use crate::shared::listeners::use_viewport_width;
use contracts::domain::LiteratureEntry;
use contracts::state::WindowedCarousel;
use leptos::prelude::*;

#[component]
pub fn LiteratureStrip(entries: &'static [LiteratureEntry]) -> impl IntoView {
    let width = use_viewport_width();
    let strip = RwSignal::new(WindowedCarousel::new(entries.len(), width.get_untracked()));

    Effect::new(move |_| {
        let w = width.get();
        strip.update(|s| s.resize_viewport(w));
    });

    let on_tick = Callback::new(move |_| {
        strip.update(|s| {
            s.tick();
        });
    });

    let track_style = move || {
        strip.with(|s| {
            format!(
                "--strip-visible: {}; transform: translateX(-{}%);",
                s.visible(),
                s.index() as f64 * 100.0 / s.visible() as f64
            )
        })
    };

    if entries.is_empty() {
        return view! { <p class="strip strip--empty">"No literature entries yet."</p> }.into_any();
    }

    view! {
        <div
            class="strip"
            on:mouseenter=move |_| strip.update(|s| s.hover_start())
            on:mouseleave=move |_| strip.update(|s| s.hover_end())
        >
            <Show when=move || strip.with(|s| s.autoplay().is_enabled())>
                <AutoplayTicker on_tick=on_tick />
            </Show>

            <button
                class="strip__arrow strip__arrow--prev"
                aria-label="Previous papers"
                disabled=move || !strip.with(|s| s.can_prev())
                on:click=move |_| strip.update(|s| s.prev())
            >
                {icon("chevron-left")}
            </button>

            <div class="strip__viewport">
                <div class="strip__track" style=track_style>
                    {entries.iter().enumerate().map(|(i, entry)| view! {
                        <article
                            class="strip__card"
                            aria-hidden=move || (!strip.with(|s| s.is_in_view(i))).to_string()
                        >
                            <span class="strip__year">{entry.year}</span>
                            <h3 class="strip__title">{entry.title.as_str()}</h3>
                            <p class="strip__source">{entry.source.as_str()}</p>
                            <p class="strip__summary">{entry.summary.as_str()}</p>
                        </article>
                    }).collect_view()}
                </div>
            </div>

            <button
                class="strip__arrow strip__arrow--next"
                aria-label="Next papers"
                disabled=move || !strip.with(|s| s.can_next())
                on:click=move |_| strip.update(|s| s.next())
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
    .into_any()
}
