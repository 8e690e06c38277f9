mod app;
mod bridge;
mod toast;

pub mod components {
    pub mod about;
    pub mod charts;
    pub mod dashboard;
    pub mod home;
    pub mod navbar;
    pub mod plan_finder;
}

use app::App;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting Havenly UI");
    mount_to_body(|| view! { <App/> });
}
