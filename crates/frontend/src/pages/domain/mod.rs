mod detail;
mod literature_strip;

use crate::shared::components::card_animated::{stagger, CardAnimated};
use crate::shared::components::page_header::SectionHeader;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::content;
use contracts::state::ModalState;
use detail::{DetailBody, DetailSummary};
use leptos::prelude::*;
use literature_strip::LiteratureStrip;

#[component]
pub fn DomainPage() -> impl IntoView {
    let research = &content::site().research;
    let literature = &content::site().literature;

    let gap = &research.gap;
    let problem = &research.problem;

    let gap_modal = RwSignal::new(ModalState::new());
    let problem_modal = RwSignal::new(ModalState::new());
    let open_gap = Callback::new(move |_| {
        log::debug!("opening research gap details");
        gap_modal.update(|m| m.open());
    });
    let open_problem = Callback::new(move |_| {
        log::debug!("opening research problem details");
        problem_modal.update(|m| m.open());
    });

    view! {
        <div class="page">
            <SectionHeader
                title="Research Domain"
                subtitle="Background, gaps in existing work and the problem Water360 addresses"
                primary=true
            />

            <section class="page__section">
                <SectionHeader title="Literature Survey" />
                <LiteratureStrip entries=literature.as_slice() />
            </section>

            <section class="page__section grid grid--2">
                <DetailSummary detail=gap on_open=open_gap />
                <DetailSummary detail=problem on_open=open_problem />
            </section>

            <section class="page__section">
                <SectionHeader title="Research Objectives" />
                <div class="grid grid--3">
                    {research.objectives.iter().enumerate().map(|(i, objective)| view! {
                        <CardAnimated delay_ms=stagger(i) class="objective-card">
                            <div class=format!("objective-card__icon {}", objective.color) aria-hidden="true">
                                {objective.icon.as_str()}
                            </div>
                            <h3 class="objective-card__title">{objective.title.as_str()}</h3>
                            <p class="objective-card__text">{objective.description.as_str()}</p>
                        </CardAnimated>
                    }).collect_view()}
                </div>
            </section>

            <section class="page__section">
                <SectionHeader title="Methodology" />
                <div class="grid grid--2">
                    {research.diagrams.iter().map(|diagram| view! {
                        <figure class="diagram">
                            <h3 class="diagram__title">{diagram.title.as_str()}</h3>
                            <img class="diagram__image" src=diagram.image_ref.as_str() alt=diagram.alt.as_str() loading="lazy" />
                            <figcaption class="diagram__caption">{diagram.caption.as_str()}</figcaption>
                            <a class="button button--ghost diagram__download" href=diagram.image_ref.as_str() download="">
                                {icon("download")}
                                <span>"Download diagram"</span>
                            </a>
                        </figure>
                    }).collect_view()}
                </div>
            </section>

            <section class="page__section">
                <SectionHeader title="Technologies Used" />
                <div class="tech-groups">
                    {research.tech_groups.iter().map(|group| view! {
                        <div class="tech-group">
                            <h3 class="tech-group__label">
                                {icon(&group.icon)}
                                <span>{group.label.as_str()}</span>
                            </h3>
                            <ul class="tech-group__items">
                                {group.items.iter().map(|item| view! {
                                    <li class="chip">{item.as_str()}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <Modal title="Research Gap" state=gap_modal>
                <DetailBody detail=gap />
            </Modal>
            <Modal title="Research Problem" state=problem_modal>
                <DetailBody detail=problem />
            </Modal>
        </div>
    }
}
