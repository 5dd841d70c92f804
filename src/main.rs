//! Todo CRUD Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod context;
mod models;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }

    mount_to_body(App);
}
