use leptos::prelude::*;

/// Labelled single-line input
#[component]
pub fn Input(
    #[prop(into)]
    label: String,
    /// Element id, also used for the label's `for`
    id: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                name=id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
