//! Blob field animator
//!
//! Ties a [`BlobField`] to a drawing surface and keeps it running off a
//! [`FrameScheduler`]. All blob state changes happen inside `render_frame`.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::field::{BlobField, Viewport};
use crate::scheduler::FrameScheduler;
use crate::surface::Surface;

/// Background animator owning the field and its surface
pub struct Animator<S: Surface, R: Rng = Pcg32> {
    field: BlobField<R>,
    surface: S,
    /// Frames rendered since creation
    frames: u64,
    /// Timestamp of the last frame (ms)
    last_time: f64,
}

impl<S: Surface, R: Rng> Animator<S, R> {
    /// Take ownership of a field and size the surface to its viewport
    pub fn new(field: BlobField<R>, mut surface: S) -> Self {
        let viewport = field.viewport();
        surface.set_size(viewport.width, viewport.height);
        Self {
            field,
            surface,
            frames: 0,
            last_time: 0.0,
        }
    }

    /// Match the surface to new viewport dimensions and re-populate
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("Resize to {}x{}", viewport.width, viewport.height);
        self.surface.set_size(viewport.width, viewport.height);
        self.field.resize(viewport);
    }

    /// Clear, paint the base, then update and draw every blob
    pub fn render_frame(&mut self, time: f64) {
        self.field.paint_base(&mut self.surface);
        self.field.step_and_draw(&mut self.surface);

        self.frames += 1;
        log::trace!(
            "Frame {} at {:.1}ms ({:.1}ms since last)",
            self.frames,
            time,
            time - self.last_time
        );
        self.last_time = time;
    }

    pub fn field(&self) -> &BlobField<R> {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Start the render loop: each frame renders, then requests the next one.
/// Runs until the scheduler stops delivering callbacks.
pub fn start<S, R, F>(animator: Rc<RefCell<Animator<S, R>>>, scheduler: Rc<F>)
where
    S: Surface + 'static,
    R: Rng + 'static,
    F: FrameScheduler + 'static,
{
    let next = scheduler.clone();
    scheduler.request_next_frame(Box::new(move |time| {
        animator.borrow_mut().render_frame(time);
        start(animator, next);
    }));
}
