use leptos::prelude::*;

/// Centered section heading with the accent divider used on every page
#[component]
pub fn SectionHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Renders the title as the page `<h1>` instead of a section `<h2>`
    #[prop(optional)]
    primary: bool,
) -> impl IntoView {
    let heading = if primary {
        view! { <h1 class="section-header__title section-header__title--primary">{title}</h1> }.into_any()
    } else {
        view! { <h2 class="section-header__title">{title}</h2> }.into_any()
    };

    view! {
        <div class="section-header">
            {heading}
            <div class="section-header__divider"></div>
            {move || subtitle.get().map(|s| view! {
                <p class="section-header__subtitle">{s}</p>
            })}
        </div>
    }
}
