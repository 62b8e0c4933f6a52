//! Scroll-progress path: a wavy run of SVG dots spanning the page, eaten by
//! a marker glyph as the reader scrolls.
//!
//! Page height is re-measured on resize, on window load, and on a 1 s poll
//! while mounted (late-arriving content changes the scrollable height); a
//! changed height regenerates the whole dot sequence. The marker follows a
//! spring-smoothed scroll fraction rather than the raw signal.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::dom;
use crate::engine::path::{self, PathConfig, PathDot};
use crate::engine::spring::Spring;

/// Delay between a measurement trigger and the actual read, letting layout
/// settle first.
const SETTLE_DELAY_MS: u32 = 200;
/// Delay between a height change and the path rebuild.
const REBUILD_DELAY_MS: u32 = 300;
/// Poll period for late-arriving content.
const MEASURE_POLL_MS: u32 = 1_000;

const MOUTH_OPEN: &str = "M 0,-10 A 10,10 0 1,1 0,10 A 10,10 0 0,1 -7.07,-7.07 L 0,0 Z";
const MOUTH_SHUT: &str = "M 0,-10 A 10,10 0 1,1 0,10 A 10,10 0 0,1 0,0 L 0,0 Z";

struct PathState {
    container: Element,
    svg: Element,
    marker: Element,
    dots: Vec<PathDot>,
    circles: Vec<Element>,
    /// Consumed count currently applied to the DOM; `usize::MAX` forces the
    /// next apply to touch every node.
    consumed: usize,
    page_height: f32,
    spring: Spring,
    last_timestamp: Option<f64>,
    pending_measure: Option<Timeout>,
    pending_rebuild: Option<Timeout>,
}

pub struct ScrollPath {
    state: Rc<RefCell<PathState>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    _interval: Interval,
    _listeners: Vec<EventListener>,
}

impl ScrollPath {
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let container = dom::el(document, "div", "scroll-path")?;
        container.set_attribute("aria-hidden", "true")?;

        let svg = dom::svg_el(document, "svg")?;
        let marker = build_marker(document)?;
        svg.append_child(&marker)?;
        container.append_child(&svg)?;
        document.body().ok_or("no body")?.append_child(&container)?;

        let state = Rc::new(RefCell::new(PathState {
            container,
            svg,
            marker,
            dots: Vec::new(),
            circles: Vec::new(),
            consumed: usize::MAX,
            page_height: 0.0,
            spring: Spring::scroll_default(),
            last_timestamp: None,
            pending_measure: None,
            pending_rebuild: None,
        }));

        schedule_measure(&state);

        let window = dom::window()?;
        let listeners = vec![
            EventListener::new(&window, "resize", {
                let state = state.clone();
                move |_| schedule_measure(&state)
            }),
            EventListener::new(&window, "load", {
                let state = state.clone();
                move |_| schedule_measure(&state)
            }),
        ];
        let interval = Interval::new(MEASURE_POLL_MS, {
            let state = state.clone();
            move || schedule_measure(&state)
        });

        let frame = Rc::new(RefCell::new(None));
        schedule_frame(&state, &frame);

        Ok(Self {
            state,
            frame,
            _interval: interval,
            _listeners: listeners,
        })
    }
}

impl Drop for ScrollPath {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
        let mut state = self.state.borrow_mut();
        state.pending_measure = None;
        state.pending_rebuild = None;
        state.container.remove();
    }
}

/// Queue a (debounced) height measurement after the settling delay.
fn schedule_measure(state: &Rc<RefCell<PathState>>) {
    let handle = Timeout::new(SETTLE_DELAY_MS, {
        let state = state.clone();
        move || {
            state.borrow_mut().pending_measure = None;
            measure(&state);
        }
    });
    state.borrow_mut().pending_measure = Some(handle);
}

fn measure(state: &Rc<RefCell<PathState>>) {
    let Ok(document) = dom::document() else { return };
    let Some(root) = document.document_element() else { return };
    let height = root.scroll_height() as f32;

    let mut s = state.borrow_mut();
    if height == s.page_height {
        return;
    }
    s.page_height = height;
    log::debug!("page height now {height}, regenerating scroll path");

    let handle = Timeout::new(REBUILD_DELAY_MS, {
        let state = state.clone();
        move || {
            state.borrow_mut().pending_rebuild = None;
            if let Err(err) = rebuild(&state) {
                log::warn!("scroll path rebuild failed: {err:?}");
            }
        }
    });
    s.pending_rebuild = Some(handle);
}

/// Regenerate the dot sequence from the current geometry, replacing the old
/// one wholesale.
fn rebuild(state: &Rc<RefCell<PathState>>) -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;
    let (viewport_w, viewport_h) = dom::viewport_size(&window);

    let mut s = state.borrow_mut();
    let dots = path::generate(&PathConfig::default(), viewport_h, s.page_height);

    for circle in s.circles.drain(..) {
        circle.remove();
    }

    s.container
        .set_attribute("style", &format!("height:{}px", s.page_height))?;
    s.svg.set_attribute("width", &format!("{viewport_w}"))?;
    s.svg.set_attribute("height", &format!("{}", s.page_height))?;

    let mut circles = Vec::with_capacity(dots.len());
    for dot in &dots {
        let circle = dom::svg_el(&document, "circle")?;
        circle.set_attribute("class", "path-dot")?;
        circle.set_attribute("r", "6")?;
        circle.set_attribute(
            "transform",
            &format!("translate({:.1} {:.1}) scale(1)", dot.pos.x, dot.pos.y),
        )?;
        s.svg.append_child(&circle)?;
        circles.push(circle);
    }
    // Keep the marker painted above the dots.
    s.svg.append_child(&s.marker)?;

    s.dots = dots;
    s.circles = circles;
    s.consumed = usize::MAX;
    apply_scroll(&mut s);
    Ok(())
}

fn schedule_frame(state: &Rc<RefCell<PathState>>, frame: &Rc<RefCell<Option<AnimationFrame>>>) {
    let handle = request_animation_frame({
        let state = state.clone();
        let frame = frame.clone();
        move |timestamp| {
            tick(&mut state.borrow_mut(), timestamp);
            schedule_frame(&state, &frame);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

fn tick(s: &mut PathState, timestamp: f64) {
    let dt = match s.last_timestamp {
        Some(prev) => ((timestamp - prev) / 1000.0) as f32,
        None => 1.0 / 60.0,
    };
    s.last_timestamp = Some(timestamp);

    s.spring.set_target(raw_scroll_fraction());
    s.spring.tick(dt);
    apply_scroll(s);
}

/// Raw scroll position over scrollable height, in [0, 1]. Zero while the
/// environment is not available or the page does not scroll.
fn raw_scroll_fraction() -> f32 {
    let Ok(window) = dom::window() else { return 0.0 };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    let (_, viewport_h) = dom::viewport_size(&window);
    let max = root.scroll_height() as f32 - viewport_h;
    if max <= 0.0 {
        return 0.0;
    }
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    (scroll_y / max).clamp(0.0, 1.0)
}

/// Push the current consumed count and marker pose into the DOM. Only does
/// work when the consumed count actually changed.
fn apply_scroll(s: &mut PathState) {
    let count = path::consumed_count(s.spring.value(), s.dots.len());
    if count == s.consumed {
        return;
    }
    s.consumed = count;

    for (i, circle) in s.circles.iter().enumerate() {
        let eaten = i < count;
        let dot = s.dots[i].pos;
        let _ = circle.set_attribute("opacity", if eaten { "0" } else { "0.8" });
        let _ = circle.set_attribute(
            "transform",
            &format!(
                "translate({:.1} {:.1}) scale({})",
                dot.x,
                dot.y,
                if eaten { "0" } else { "1" }
            ),
        );
    }

    match path::marker_index(count, s.dots.len()) {
        Some(index) => {
            let current = s.dots[index].pos;
            let rotation = s
                .dots
                .get(index + 1)
                .map(|next| path::marker_rotation(current, next.pos))
                .unwrap_or(0.0);
            let _ = s.marker.set_attribute("visibility", "visible");
            let _ = s.marker.set_attribute(
                "transform",
                &format!(
                    "translate({:.1} {:.1}) rotate({:.1})",
                    current.x, current.y, rotation
                ),
            );
        }
        None => {
            let _ = s.marker.set_attribute("visibility", "hidden");
        }
    }
}

fn build_marker(document: &Document) -> Result<Element, JsValue> {
    let group = dom::svg_el(document, "g")?;
    group.set_attribute("class", "path-marker")?;
    group.set_attribute("visibility", "hidden")?;

    let body = dom::svg_el(document, "path")?;
    body.set_attribute("d", MOUTH_OPEN)?;
    body.set_attribute("fill", "#FFD700")?;

    // Chomp loop runs declaratively; the frame callback never touches it.
    let chomp = dom::svg_el(document, "animate")?;
    chomp.set_attribute("attributeName", "d")?;
    chomp.set_attribute("values", &format!("{MOUTH_OPEN};{MOUTH_SHUT};{MOUTH_OPEN}"))?;
    chomp.set_attribute("dur", "0.25s")?;
    chomp.set_attribute("repeatCount", "indefinite")?;
    body.append_child(&chomp)?;
    group.append_child(&body)?;

    let eye = dom::svg_el(document, "circle")?;
    eye.set_attribute("cx", "-3")?;
    eye.set_attribute("cy", "-4")?;
    eye.set_attribute("r", "2")?;
    eye.set_attribute("fill", "#000")?;
    group.append_child(&eye)?;

    let glow = dom::svg_el(document, "circle")?;
    glow.set_attribute("r", "14")?;
    glow.set_attribute("fill", "#FFD700")?;
    glow.set_attribute("opacity", "0.15")?;
    group.append_child(&glow)?;

    Ok(group)
}
