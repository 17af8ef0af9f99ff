#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod geo;
pub mod i18n;
pub mod logger;
pub mod pages;
pub mod paths;
pub mod router;
pub mod share;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(paths::client_config().log_level_filter());
    log::info!("BridgeTales starting");
    yew::Renderer::<app::App>::new().render();
}
