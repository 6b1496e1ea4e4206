use contracts::domain::ResearchDetail;
use leptos::prelude::*;

/// Teaser card with the highlights and a "Read more" button
#[component]
pub fn DetailSummary(detail: &'static ResearchDetail, on_open: Callback<()>) -> impl IntoView {
    view! {
        <article class="detail-summary">
            <h2 class="detail-summary__title">{detail.title.as_str()}</h2>
            <p class="detail-summary__text">{detail.summary.as_str()}</p>
            <ul class="detail-summary__highlights">
                {detail.highlights.iter().map(|h| view! { <li>{h.as_str()}</li> }).collect_view()}
            </ul>
            <button class="button button--secondary" on:click=move |_| on_open.run(())>
                "Read more"
            </button>
        </article>
    }
}

/// Full text shown inside the modal
#[component]
pub fn DetailBody(detail: &'static ResearchDetail) -> impl IntoView {
    view! {
        <div class="detail-body">
            {detail.sections.iter().map(|section| view! {
                <section class="detail-body__section">
                    <h3>{section.heading.as_str()}</h3>
                    {section.paragraph.as_deref().map(|p| view! { <p>{p}</p> })}
                    {(!section.points.is_empty()).then(|| view! {
                        <ul>
                            {section.points.iter().map(|point| view! { <li>{point.as_str()}</li> }).collect_view()}
                        </ul>
                    })}
                </section>
            }).collect_view()}
        </div>
    }
}
