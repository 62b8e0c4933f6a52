#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// The animation engine is pure geometry and compiles on every target, which
// keeps `cargo test` usable on the host. Browser code is wasm32-only.

pub mod engine;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod app;
    mod content;
    mod dom;
    mod pixel_trail;
    mod scroll_path;
    mod sections;

    pub use app::{mount, unmount};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        // Documents without the root element (embedding hosts, test pages)
        // get a no-op instead of an error.
        if dom::document()?.get_element_by_id("app").is_none() {
            log::warn!("no #app root in this document, skipping mount");
            return Ok(());
        }
        mount()
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
