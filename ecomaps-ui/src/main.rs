//! EcoMaps
//!
//! Recycling collection point map built with Leptos (WASM).
//!
//! # Features
//!
//! - Email-only session gate
//! - Click on the map to register a collection point
//! - List and detail views for registered points
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in memory for the lifetime of the page; the
//! map is drawn by Leaflet, loaded from a CDN by index.html.

use leptos::*;

mod app;
mod components;
mod map;
mod model;
mod pages;
mod routes;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to initialize logging: {}", e).into());
    }

    map::configure_marker_icons();

    log::info!("EcoMaps v{} starting", env!("CARGO_PKG_VERSION"));
    mount_to_body(|| view! { <app::App /> });
}
