//! Job Application Tracker - Yew WASM frontend.
//!
//! A kanban-style board for tracking job applications, backed by the
//! tracker REST API and a bearer-token session.

mod app;
mod components;
mod context;
mod pages;
mod services;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
