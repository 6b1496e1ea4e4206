//! Window listeners scoped to the lifetime of the component that creates them.

use leptos::ev;
use leptos::prelude::*;

/// Forwards every window `keydown` to `on_key` while mounted.
#[component]
pub fn KeydownListener(on_key: Callback<String>) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        on_key.run(ev.key());
    });
    on_cleanup(move || handle.remove());
}

/// Viewport width used when `window.innerWidth` is unavailable
pub const FALLBACK_VIEWPORT_WIDTH_PX: f64 = 1280.0;

pub fn viewport_width() -> f64 {
    match web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
    {
        Some(width) => width,
        None => {
            log::warn!("window.innerWidth unavailable, assuming {}px", FALLBACK_VIEWPORT_WIDTH_PX);
            FALLBACK_VIEWPORT_WIDTH_PX
        }
    }
}

/// Signal tracking `window.innerWidth`, updated on every `resize` event.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(viewport_width());
    let handle = window_event_listener(ev::resize, move |_| {
        set_width.set(viewport_width());
    });
    on_cleanup(move || handle.remove());
    width
}
