//! Reveal-on-scroll threshold

use crate::consts::REVEAL_OFFSET;

/// An element reveals once its top edge rises above the reveal line,
/// `REVEAL_OFFSET` pixels above the bottom of the window
pub fn should_reveal(element_top: f64, window_height: f64) -> bool {
    element_top < window_height - REVEAL_OFFSET
}
