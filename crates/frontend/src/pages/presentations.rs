use crate::shared::components::card_animated::{stagger, CardAnimated};
use crate::shared::components::page_header::SectionHeader;
use crate::shared::icons::icon;
use contracts::content;
use leptos::prelude::*;

#[component]
pub fn PresentationsPage() -> impl IntoView {
    let presentations = &content::site().presentations;

    view! {
        <div class="page">
            <SectionHeader title="Presentations" subtitle="Slides from each project review" primary=true />

            <div class="grid grid--2">
                {presentations.iter().enumerate().map(|(i, p)| view! {
                    <CardAnimated delay_ms=stagger(i) class="presentation-card">
                        <div class="presentation-card__icon">{icon("presentation")}</div>
                        <h3 class="presentation-card__title">{p.title.as_str()}</h3>
                        <p class="presentation-card__date">{icon("calendar")}{p.date.as_str()}</p>
                        <p class="presentation-card__text">{p.description.as_str()}</p>
                        <a class="button button--secondary" href=p.download_link.as_str() download="">
                            {icon("download")}
                            <span>"Download slides"</span>
                        </a>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </div>
    }
}
