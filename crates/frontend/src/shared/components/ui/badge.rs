use leptos::prelude::*;

/// Pill-shaped label; `tone` is one of the `tone--*` colour modifiers
#[component]
pub fn Badge(
    #[prop(optional, into)]
    tone: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let tone_class = move || tone.get().unwrap_or_else(|| "tone--blue".to_string());

    view! {
        <span class=move || format!("badge {}", tone_class())>
            {children()}
        </span>
    }
}
