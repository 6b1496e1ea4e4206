pub mod app;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Some(reason) = contracts::content::load_error() {
        log::error!("site content failed to load: {}", reason);
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
