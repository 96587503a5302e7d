//! Custom cursor: a dot that tracks the pointer and an outline that follows

use super::px;

/// Pointer position in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorTarget {
    pub x: f64,
    pub y: f64,
}

impl CursorTarget {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `left` / `top` values placing an element at the pointer
    pub fn position(&self) -> (String, String) {
        (px(self.x), px(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CURSOR_OUTLINE_LAG_MS;

    #[test]
    fn test_position() {
        let target = CursorTarget::new(120.0, 48.5);
        assert_eq!(target.position(), ("120px".to_string(), "48.5px".to_string()));
        // Outline eases over half a second regardless of where the pointer is
        assert_eq!(CURSOR_OUTLINE_LAG_MS, 500.0);
    }
}
