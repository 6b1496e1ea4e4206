use leptos::prelude::*;

/// Native select over `(value, label)` pairs
#[component]
pub fn Select(
    /// Currently selected option value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    /// Accessible name of the control
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            class=move || format!("form__select {}", additional_class())
            aria-label=move || aria_label.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options.into_iter().map(|(val, label)| {
                let val_clone = val.clone();
                let is_selected = move || value.get() == val_clone;
                view! {
                    <option value=val selected=is_selected>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
