//! Browser entry point
//!
//! Draws on an HTML `<canvas>` through its 2D context and schedules frames
//! with `requestAnimationFrame`. A frame re-schedules itself only while the
//! animation loop answers `Continue`, so at most one frame is ever pending.
//! Once the loop halts the callback is dropped from a later task, since it
//! cannot free itself while running.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState};

use bounce_core::{
    AnimationLoop, Color, LoopControl, SetupError, Simulation, StartMode, Variant, WallResponse,
};
use bounce_render::web::CanvasSurface;

use crate::config::{RenderingConfig, SimulationConfig};

type FrameCallback = Closure<dyn FnMut() -> Result<(), JsValue>>;

/// Module start: hooks up logging, then runs the default variant on the
/// default canvas
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second module instance finds the logger already set
    let _ = console_log::init_with_level(log::Level::Info);

    let defaults = SimulationConfig::default();
    launch(
        defaults.variant,
        defaults.walls,
        defaults.canvas_id,
        RenderingConfig::default().ball_color(),
    )
}

/// Start another animation with an explicit variant and canvas id
#[wasm_bindgen]
pub fn run(variant: &str, canvas_id: &str) -> Result<(), JsValue> {
    let variant: Variant = variant.parse().map_err(|e: String| JsValue::from_str(&e))?;
    launch(variant, WallResponse::default(), canvas_id.to_string(), Color::RED)
}

fn launch(
    variant: Variant,
    walls: WallResponse,
    canvas_id: String,
    color: Color,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document on window")?;

    match variant.start_mode() {
        StartMode::OnContentLoaded if document.ready_state() == DocumentReadyState::Loading => {
            let doc = document.clone();
            let on_loaded = Closure::once_into_js(move || {
                if let Err(e) = begin(&doc, variant, walls, &canvas_id, color) {
                    log::error!("{:?}", e);
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_loaded.unchecked_ref::<js_sys::Function>(),
            )
        }
        _ => begin(&document, variant, walls, &canvas_id, color),
    }
}

/// Acquire the canvas and schedule the first frame
fn begin(
    document: &Document,
    variant: Variant,
    walls: WallResponse,
    canvas_id: &str,
    color: Color,
) -> Result<(), JsValue> {
    if variant == Variant::Guarded {
        log::info!("bouncingBall loaded");
    }

    let surface = match CanvasSurface::find(document, canvas_id) {
        Ok(surface) => surface,
        Err(e) => {
            let err = SetupError::from(e);
            return match variant {
                Variant::Guarded => {
                    log::error!("{}", err);
                    Ok(())
                }
                Variant::Plain => Err(JsValue::from_str(&err.to_string())),
            };
        }
    };

    let simulation = Simulation::centered(surface.bounds(), variant)
        .with_walls(walls)
        .with_color(color);
    let mut animation = AnimationLoop::new(simulation, variant.error_policy());
    if animation.start() == LoopControl::Stop {
        return Ok(());
    }

    let state = Rc::new(RefCell::new((animation, surface)));

    // The callback keeps a handle to itself to re-schedule
    let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let handle = callback.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        let (result, halted) = {
            let mut guard = state.borrow_mut();
            let (animation, surface) = &mut *guard;
            let bounds = surface.bounds();
            let result = animation.frame(surface, bounds);
            (result, animation.is_halted())
        };

        if halted {
            release_later(handle.clone())?;
        }

        match result {
            Ok(LoopControl::Continue) => {
                if let Some(cb) = handle.borrow().as_ref() {
                    request_animation_frame(cb)?;
                }
                Ok(())
            }
            Ok(LoopControl::Stop) => Ok(()),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }));

    if let Some(cb) = callback.borrow().as_ref() {
        request_animation_frame(cb)?;
    }
    Ok(())
}

/// Break the callback's reference to itself from a fresh task
///
/// Dropping a `Closure` while it runs is invalid, so the drop is queued.
fn release_later(callback: Rc<RefCell<Option<FrameCallback>>>) -> Result<(), JsValue> {
    let release = Closure::once_into_js(move || {
        callback.borrow_mut().take();
    });
    web_sys::window()
        .ok_or("no global window")?
        .set_timeout_with_callback(release.unchecked_ref())?;
    Ok(())
}

fn request_animation_frame(f: &FrameCallback) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no global window")?
        .request_animation_frame(f.as_ref().unchecked_ref())
}
