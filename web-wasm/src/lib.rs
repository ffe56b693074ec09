//! Dealer Forms Web App (Leptos + WASM)

mod app;
mod autosave;
mod components;
mod debounce;
mod utility;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    utility::init_page_enhancements();
    leptos::mount::mount_to_body(app::App);
}
