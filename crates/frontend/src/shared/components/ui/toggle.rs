use leptos::prelude::*;

/// Two-state switch with a label on each side.
///
/// `checked` selects the right-hand label.
#[component]
pub fn Toggle(
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    off_label: &'static str,
    on_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="toggle">
            <span class="toggle__label" class:toggle__label--current=move || !checked.get()>
                {off_label}
            </span>
            <button
                type="button"
                role="switch"
                class="toggle__track"
                class:toggle__track--on=move || checked.get()
                aria-checked=move || checked.get().to_string()
                on:click=move |_| on_change.run(!checked.get_untracked())
            >
                <span class="toggle__thumb"></span>
            </button>
            <span class="toggle__label" class:toggle__label--current=move || checked.get()>
                {on_label}
            </span>
        </div>
    }
}
