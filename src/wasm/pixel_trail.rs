//! Pointer-reactive pixel trail on the hero canvas.
//!
//! Squares spawn under the pointer (or first touch point) and near four
//! fixed cluster anchors, then rise and fade. All state lives in one
//! `TrailSim` behind an `Rc`; the listeners and the animation-frame chain
//! are RAII handles, so dropping the component stops everything.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, TouchEvent};

use super::dom;
use crate::engine::trail::{TrailConfig, TrailSim};

const CLEAR_FILL: &str = "#000000";

struct TrailState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sim: TrailSim,
}

pub struct PixelTrail {
    // The frame closure holds an Rc to this slot; taking the handle in Drop
    // cancels the pending frame and breaks the cycle.
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    _listeners: Vec<EventListener>,
}

impl PixelTrail {
    /// Start the effect on `canvas`. Returns `None` when no 2D context is
    /// available; the page renders fine without the effect.
    pub fn mount(canvas: HtmlCanvasElement) -> Result<Option<Self>, JsValue> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>()?,
            _ => {
                log::warn!("2d canvas context unavailable, pixel trail disabled");
                return Ok(None);
            }
        };

        let window = dom::window()?;
        let (width, height) = dom::viewport_size(&window);
        let state = Rc::new(RefCell::new(TrailState {
            canvas,
            ctx,
            sim: TrailSim::new(TrailConfig::default(), width, height),
        }));
        fit_viewport(&mut state.borrow_mut());

        let mut listeners = Vec::with_capacity(3);
        listeners.push(EventListener::new(&window, "resize", {
            let state = state.clone();
            move |_| fit_viewport(&mut state.borrow_mut())
        }));
        listeners.push(EventListener::new(&window, "pointermove", {
            let state = state.clone();
            move |event| {
                if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
                    burst_at(&state, pointer.client_x() as f32, pointer.client_y() as f32);
                }
            }
        }));
        listeners.push(EventListener::new(&window, "touchmove", {
            let state = state.clone();
            move |event| {
                let touch = event
                    .dyn_ref::<TouchEvent>()
                    .and_then(|touch_event| touch_event.touches().get(0));
                if let Some(touch) = touch {
                    burst_at(&state, touch.client_x() as f32, touch.client_y() as f32);
                }
            }
        }));

        let frame = Rc::new(RefCell::new(None));
        schedule(&state, &frame);

        Ok(Some(Self {
            frame,
            _listeners: listeners,
        }))
    }
}

impl Drop for PixelTrail {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
    }
}

/// Match the canvas backing store to the viewport at device-pixel-ratio
/// resolution and recompute the cluster anchors. Safe to call repeatedly.
fn fit_viewport(state: &mut TrailState) {
    let Ok(window) = dom::window() else { return };
    let (width, height) = dom::viewport_size(&window);
    let dpr = window.device_pixel_ratio();

    state.canvas.set_width((width as f64 * dpr) as u32);
    state.canvas.set_height((height as f64 * dpr) as u32);
    let style = state.canvas.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
    let _ = state.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

    state.sim.resize(width, height);
}

fn burst_at(state: &Rc<RefCell<TrailState>>, client_x: f32, client_y: f32) {
    let mut state = state.borrow_mut();
    let rect = state.canvas.get_bounding_client_rect();
    let at = Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32);
    state.sim.pointer_burst(at, &mut dom::rand_f32);
}

fn schedule(state: &Rc<RefCell<TrailState>>, frame: &Rc<RefCell<Option<AnimationFrame>>>) {
    let handle = request_animation_frame({
        let state = state.clone();
        let frame = frame.clone();
        move |_timestamp| {
            draw_frame(&mut state.borrow_mut());
            schedule(&state, &frame);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

fn draw_frame(state: &mut TrailState) {
    let TrailState { canvas, ctx, sim } = state;

    sim.step(&mut dom::rand_f32);

    ctx.set_fill_style_str(CLEAR_FILL);
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    for particle in sim.particles() {
        ctx.set_fill_style_str(&format!("rgba(110, 62, 206, {:.3})", particle.opacity()));
        ctx.fill_rect(
            particle.pos.x.round() as f64,
            particle.pos.y.round() as f64,
            particle.size as f64,
            particle.size as f64,
        );
    }
}
