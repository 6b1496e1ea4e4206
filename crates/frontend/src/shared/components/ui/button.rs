use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost, danger)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", "ghost" or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Accessible label for icon-only buttons
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };

    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {}", variant_class(), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            aria-label=move || aria_label.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
