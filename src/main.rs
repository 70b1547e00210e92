//! Food Rescue Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod forms;
mod models;
mod orchestrator;
mod view_model;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
