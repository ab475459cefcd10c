//! Pitch Coach Web App (Leptos + WASM)

mod app;
pub mod api;
mod components;
mod media;
mod pages;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // 二重初期化時のエラーは無視
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("backend: {}", api::backend::api_config().base_url);
    leptos::mount::mount_to_body(app::App);
}
