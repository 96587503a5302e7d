//! Browser entry point and bindings (wasm32 only)
//!
//! - `canvas`: 2D canvas [`crate::Surface`]
//! - `frame`: `requestAnimationFrame` [`crate::FrameScheduler`]
//! - `page`: scroll, cursor, tilt and hover effects

pub mod canvas;
pub mod frame;
pub mod page;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use crate::animator::{self, Animator};
use crate::config::FieldConfig;
use crate::consts::CANVAS_ID;
use crate::field::{BlobField, Viewport};

pub use canvas::CanvasSurface;
pub use frame::AnimationFrameScheduler;

/// Current `innerWidth` x `innerHeight`
pub fn viewport_of(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Start the background animation and attach the page effects
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
    }

    log::info!("Blob field starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("no background canvas"))?
        .dyn_into()?;

    let surface = CanvasSurface::new(canvas)?;

    let seed = js_sys::Date::now() as u64;
    let viewport = viewport_of(&window);
    let field = BlobField::seeded(seed, viewport, FieldConfig::default());
    let animator = Rc::new(RefCell::new(Animator::new(field, surface)));
    log::info!(
        "Field initialized with seed {} at {}x{}",
        seed,
        viewport.width,
        viewport.height
    );

    // Re-populate on every resize
    {
        let animator = animator.clone();
        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            animator.borrow_mut().resize(viewport_of(&win));
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let scheduler = Rc::new(AnimationFrameScheduler::new(window.clone()));
    animator::start(animator, scheduler);

    page::install(&window, &document, seed.wrapping_add(1))?;

    log::info!("Blob field running!");
    Ok(())
}
