use contracts::state::AUTOPLAY_INTERVAL_MS;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Calls `on_tick` periodically while mounted.
///
/// Carousels mount it under `<Show when=autoplay_enabled>`, so hovering or
/// leaving the page drops the interval and cancels the timer.
#[component]
pub fn AutoplayTicker(
    on_tick: Callback<()>,
    #[prop(optional)] interval_ms: Option<u32>,
) -> impl IntoView {
    let period = interval_ms.unwrap_or(AUTOPLAY_INTERVAL_MS);
    let interval = StoredValue::new_local(Some(Interval::new(period, move || {
        on_tick.run(());
    })));

    on_cleanup(move || {
        // Dropping the interval clears the browser timer.
        interval.update_value(|slot| {
            slot.take();
        });
    });
}
