//! Shopping List Frontend Entry Point

mod models;
mod error;
mod draft;
mod config;
mod logging;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = UiConfig::default();
    if let Err(e) = logging::init_logger(config.log_level, config.log_capacity) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
