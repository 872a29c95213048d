pub mod api;
pub mod components;
pub mod config;
pub mod import;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Resolves the runtime configuration, picks the store adapter and mounts
/// the admin app.
pub async fn boot() {
    let config = config::load().await;
    let store = config::build_store(&config);
    router::mount_app(store);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {}", err).into());
    }
    log::info!("Starting agency admin (wasm)");
    leptos::spawn_local(boot());
}
