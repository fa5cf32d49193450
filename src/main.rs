// WASM entrypoint for Trunk.
//
// Native builds of this crate are intentionally no-ops by default; the real
// controller is behind `--features web` and `wasm32`. Module scripts execute
// after the document is parsed, so binding at start() satisfies the
// ready-state contract without a DOMContentLoaded hook.

fn main() {
    // No-op on native targets.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    studash_web::start();
}
