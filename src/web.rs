//! Wasm-only page controller.
//!
//! `start()` runs once when the module loads (module scripts execute after the
//! document is parsed, so every referenced element may already exist). Each
//! sub-init looks up its own elements and silently skips itself when they are
//! absent, so partial pages degrade feature-by-feature instead of failing.

mod actions;
mod dom;
mod modal;
mod search;
mod services;
mod tooltip;
mod upload;

use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;

pub use modal::show_student_details;
pub use services::{DashboardServices, StubServices};

/// Wire the dashboard with the default stub services.
pub fn start() {
    init_with(Rc::new(StubServices));
}

/// Wire the dashboard against an injected service boundary. The event
/// handlers contain no business logic, so swapping in a real export/filter
/// backend never touches the wiring.
pub fn init_with(services: Rc<dyn DashboardServices>) {
    tooltip::init();
    upload::init();
    search::init();
    actions::init(services);
}

/// Exposed to the templates for stat-card rendering.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(n: f64) -> String {
    crate::ui_model::format_number(n as i64)
}
