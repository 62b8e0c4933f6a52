#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn install_root() -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    if document.get_element_by_id("app").is_none() {
        let root = document.create_element("div").unwrap();
        root.set_id("app");
        document.body().unwrap().append_child(&root).unwrap();
    }
    document
}

#[wasm_bindgen_test]
fn mount_builds_the_page_and_effects() {
    let document = install_root();
    folio_wasm::wasm::mount().unwrap();

    let canvas = document
        .query_selector(".trail-canvas")
        .unwrap()
        .expect("trail canvas missing");
    assert!(canvas.dyn_ref::<web_sys::HtmlCanvasElement>().is_some());
    assert!(document.query_selector(".scroll-path svg").unwrap().is_some());
    assert!(document
        .query_selector(".projects-grid .project-card")
        .unwrap()
        .is_some());

    folio_wasm::wasm::unmount();
}

#[wasm_bindgen_test]
fn unmount_removes_everything_it_created() {
    let document = install_root();
    folio_wasm::wasm::mount().unwrap();
    folio_wasm::wasm::unmount();

    assert!(document.query_selector(".scroll-path").unwrap().is_none());
    assert!(document.query_selector("main.page").unwrap().is_none());

    // A second mount must start from a clean slate.
    folio_wasm::wasm::mount().unwrap();
    folio_wasm::wasm::unmount();
    assert!(document.query_selector("main.page").unwrap().is_none());
}
