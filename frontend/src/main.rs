fn main() {
    #[cfg(target_arch = "wasm32")]
    agency_admin::start();

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("agency-admin runs in the browser: build for wasm32 and serve the bundle");
}
