use crate::shared::components::card_animated::{stagger, CardAnimated};
use crate::shared::components::page_header::SectionHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::content;
use contracts::domain::DocumentCategory;
use contracts::state::CategoryFilter;
use leptos::prelude::*;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let documents = content::site().documents.as_slice();
    let filter = RwSignal::new(CategoryFilter::<DocumentCategory>::All);

    let filter_button = move |label: &'static str, target: CategoryFilter<DocumentCategory>| {
        let is_current = move || filter.get() == target;
        view! {
            <button
                type="button"
                class="button filter-bar__button"
                class:button--primary=is_current
                class:button--ghost=move || !is_current()
                aria-pressed=move || is_current().to_string()
                on:click=move |_| {
                    log::debug!("document filter -> {:?}", target);
                    filter.set(target);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page">
            <SectionHeader
                title="Project Documents"
                subtitle="Proposals, reports, presentations and logs produced during the project"
                primary=true
            />

            <div class="filter-bar" role="group" aria-label="Filter documents by category">
                {filter_button("All", CategoryFilter::All)}
                {DocumentCategory::all().into_iter().map(|c| {
                    filter_button(c.display_name(), CategoryFilter::Only(c))
                }).collect_view()}
            </div>

            {move || {
                let shown = filter.get().apply(documents);
                if shown.is_empty() {
                    return view! { <p class="empty-state">"No documents in this category."</p> }.into_any();
                }
                view! {
                    <div class="grid grid--3">
                        {shown.into_iter().enumerate().map(|(i, doc)| view! {
                            <CardAnimated delay_ms=stagger(i) class="document-card">
                                <div class="document-card__header">
                                    <span class="document-card__icon">{icon(doc.category.icon())}</span>
                                    <Badge>{doc.category.display_name()}</Badge>
                                </div>
                                <h3 class="document-card__title">{doc.title.as_str()}</h3>
                                <p class="document-card__text">{doc.description.as_str()}</p>
                                <a class="button button--secondary document-card__download" href=doc.download_link.as_str() download="">
                                    {icon("download")}
                                    <span>"Download"</span>
                                </a>
                            </CardAnimated>
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
