use leptos::prelude::*;

/// Labelled multi-line input
#[component]
pub fn Textarea(
    #[prop(into)]
    label: String,
    id: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <textarea
                id=id
                name=id
                class="form__textarea"
                placeholder=textarea_placeholder
                required=required
                rows=rows.unwrap_or(5)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
