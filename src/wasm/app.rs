//! Page assembly and lifetime.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::dom;
use super::pixel_trail::PixelTrail;
use super::scroll_path::ScrollPath;
use super::sections;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// The mounted page. Dropping it cancels every frame callback and timer,
/// detaches every listener, and removes the DOM it created.
struct App {
    main: Element,
    _trail: Option<PixelTrail>,
    _scroll: ScrollPath,
}

impl Drop for App {
    fn drop(&mut self) {
        self.main.remove();
    }
}

pub fn mount() -> Result<(), JsValue> {
    // Remounting replaces (and fully tears down) any previous instance.
    unmount();

    let document = dom::document()?;
    let root = document
        .get_element_by_id("app")
        .ok_or("missing #app root element")?;

    let main = dom::el(&document, "main", "page")?;
    main.append_child(&sections::navbar(&document)?)?;
    let (hero, canvas) = sections::hero(&document)?;
    main.append_child(&hero)?;
    main.append_child(&sections::marquee(&document)?)?;
    main.append_child(&sections::skills(&document)?)?;
    main.append_child(&sections::timeline(&document)?)?;
    main.append_child(&sections::projects(&document)?)?;
    main.append_child(&sections::contact(&document)?)?;
    main.append_child(&sections::floating_chat(&document)?)?;
    main.append_child(&sections::footer(&document)?)?;
    root.append_child(&main)?;

    let trail = PixelTrail::mount(canvas)?;
    let scroll = ScrollPath::mount(&document)?;

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            main,
            _trail: trail,
            _scroll: scroll,
        });
    });
    log::info!("portfolio mounted");
    Ok(())
}

/// Tear the page down. Exposed so embedders and tests can drive the full
/// lifecycle.
#[wasm_bindgen]
pub fn unmount() {
    APP.with(|slot| slot.borrow_mut().take());
}
