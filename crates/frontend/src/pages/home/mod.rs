mod showcase;

use crate::shared::components::card_animated::{stagger, CardAnimated};
use crate::shared::components::page_header::SectionHeader;
use contracts::content;
use contracts::domain::SiteRoute;
use leptos::prelude::*;
use showcase::ShowcaseCarousel;

#[component]
pub fn HomePage() -> impl IntoView {
    let home = &content::site().home;
    let showcase = &content::site().showcase;

    view! {
        <div class="page page--home">
            <section class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">"Water360"</h1>
                    <p class="hero__subtitle">
                        "Autonomous water quality monitoring with IoT sensors, UWB mesh networking and cloud analytics"
                    </p>
                    <div class="hero__actions">
                        <a class="button button--primary" href=SiteRoute::Domain.path()>"Explore the research"</a>
                        <a class="button button--secondary" href=SiteRoute::Milestones.path()>"View milestones"</a>
                    </div>
                </div>
            </section>

            <section class="page__section">
                <SectionHeader
                    title="What Water360 does"
                    subtitle="A floating platform that samples, filters and reports water quality without a crew on board"
                />
                <div class="grid grid--3">
                    {home.features.iter().enumerate().map(|(i, feature)| view! {
                        <CardAnimated delay_ms=stagger(i) class="feature-card">
                            <div class="feature-card__icon" aria-hidden="true">{feature.icon.as_str()}</div>
                            <h3 class="feature-card__title">{feature.title.as_str()}</h3>
                            <p class="feature-card__text">{feature.description.as_str()}</p>
                        </CardAnimated>
                    }).collect_view()}
                </div>
            </section>

            <section class="page__section">
                <SectionHeader title="System showcase" />
                <ShowcaseCarousel items=showcase.as_slice() />
            </section>

            <section class="stats">
                {home.stats.iter().map(|stat| view! {
                    <div class="stats__item">
                        <span class="stats__value">{stat.value.as_str()}</span>
                        <span class="stats__label">{stat.label.as_str()}</span>
                    </div>
                }).collect_view()}
            </section>

            <section class="cta">
                <h2 class="cta__title">"Want to know more?"</h2>
                <p class="cta__text">"Read the project documents or get in touch with the team."</p>
                <div class="hero__actions">
                    <a class="button button--primary" href=SiteRoute::Documents.path()>"Browse documents"</a>
                    <a class="button button--ghost" href=SiteRoute::Contact.path()>"Contact us"</a>
                </div>
            </section>
        </div>
    }
}
