use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Resets the window scroll position whenever the path changes.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        let path = pathname.get();
        log::debug!("navigated to {}", path);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
