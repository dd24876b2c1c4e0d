//! Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod format;
mod messages;
mod store;
mod view;

#[cfg(test)]
mod test_support;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting todo frontend");

    mount_to_body(App);
}
