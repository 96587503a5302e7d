//! `requestAnimationFrame` scheduler

use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::scheduler::{FrameCallback, FrameScheduler};

pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_next_frame(&self, callback: FrameCallback) {
        let closure = Closure::once(move |time: f64| callback(time));
        if let Err(e) = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            log::warn!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }
}
