//! Browser-hosted controller for the student visualization dashboard.
//!
//! The page itself is server-rendered; this crate only wires behavior onto it:
//! tooltips, the upload drop zone, the live table search, and the toolbar
//! buttons. It is intentionally a stub by default so the crate builds and
//! tests on native targets without requiring wasm toolchains.
//!
//! Enable the real controller with: `--features web` (and a wasm32 target).

pub mod ui_model;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{init_with, start, DashboardServices, StubServices};
