//! Overlay dialog driven by a [`ModalState`] signal owned by the page.

use crate::shared::icons::icon;
use crate::shared::listeners::KeydownListener;
use contracts::state::ModalState;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title shown in the dialog header
    title: &'static str,
    /// Open flag; the dialog renders nothing while closed
    state: RwSignal<ModalState>,
    /// Dialog body
    children: ChildrenFn,
) -> impl IntoView {
    let on_key = Callback::new(move |key: String| {
        state.update(|m| {
            if m.on_key(&key) {
                log::debug!("modal '{}' closed with {}", title, key);
            }
        });
    });

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let target_is_backdrop = ev.target().is_some() && ev.target() == ev.current_target();
        state.update(|m| {
            if m.on_backdrop_click(target_is_backdrop) {
                log::debug!("modal '{}' closed from backdrop", title);
            }
        });
    };

    let handle_close = move |_| {
        log::debug!("modal '{}' closed", title);
        state.update(|m| m.close());
    };

    view! {
        <Show when=move || state.get().is_open()>
            // The keydown listener only exists while the dialog is mounted.
            <KeydownListener on_key=on_key />
            <div class="modal-overlay" role="dialog" aria-modal="true" on:click=handle_overlay_click>
                <div class="modal">
                    <div class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                        <button
                            class="button button--icon modal__close"
                            aria-label="Close modal"
                            on:click=handle_close
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
