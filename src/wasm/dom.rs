//! Thin DOM construction helpers shared by the page sections and effects.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let node = document.create_element(tag)?;
    if !class.is_empty() {
        node.set_class_name(class);
    }
    Ok(node)
}

pub fn el_text(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let node = el(document, tag, class)?;
    node.set_text_content(Some(text));
    Ok(node)
}

pub fn link(
    document: &Document,
    class: &str,
    href: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let node = el_text(document, "a", class, text)?;
    node.set_attribute("href", href)?;
    if href.starts_with("http") {
        node.set_attribute("target", "_blank")?;
        node.set_attribute("rel", "noreferrer")?;
    }
    Ok(node)
}

pub fn svg_el(document: &Document, tag: &str) -> Result<Element, JsValue> {
    document.create_element_ns(Some(SVG_NS), tag)
}

/// Viewport size in CSS pixels; zero before layout is available.
pub fn viewport_size(window: &Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Uniform sample in [0, 1) from the browser RNG.
pub fn rand_f32() -> f32 {
    js_sys::Math::random() as f32
}
