//! Display-refresh scheduling
//!
//! The render loop never drives itself with a timer. Each frame asks the
//! scheduler for exactly one callback before the next repaint.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Callback invoked with the frame timestamp (milliseconds)
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// "Run this before the next repaint"
pub trait FrameScheduler {
    fn request_next_frame(&self, callback: FrameCallback);
}

/// Fixed-tick driver for headless runs and tests
///
/// Callbacks queue up until [`FixedTickScheduler::advance`] runs them with a
/// synthetic timestamp that grows by `tick_ms` per frame.
pub struct FixedTickScheduler {
    tick_ms: f64,
    now_ms: Cell<f64>,
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl FixedTickScheduler {
    pub fn new(tick_ms: f64) -> Self {
        Self {
            tick_ms,
            now_ms: Cell::new(0.0),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// 60 Hz ticks
    pub fn sixty_hz() -> Self {
        Self::new(1000.0 / 60.0)
    }

    /// Run the callbacks queued before this tick. Callbacks requested while
    /// running wait for the next tick. Returns how many ran.
    pub fn advance(&self) -> usize {
        let now = self.now_ms.get() + self.tick_ms;
        self.now_ms.set(now);

        // Release the borrow before running; callbacks re-enter the queue
        let due: Vec<FrameCallback> = self.pending.borrow_mut().drain(..).collect();
        let count = due.len();
        for callback in due {
            callback(now);
        }
        count
    }

    /// Advance `ticks` times, returning the total number of callbacks run
    pub fn run(&self, ticks: usize) -> usize {
        (0..ticks).map(|_| self.advance()).sum()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

impl FrameScheduler for FixedTickScheduler {
    fn request_next_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}
