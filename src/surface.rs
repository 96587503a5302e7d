//! Drawing surface abstraction
//!
//! The animator only needs three primitives. The browser build paints onto a
//! 2D canvas context; the native driver and tests record commands instead.

use glam::Vec2;

use crate::color::Rgba;

/// A 2D target the animator paints onto
pub trait Surface {
    /// Resize the backing store to exactly `width` x `height` pixels
    fn set_size(&mut self, width: u32, height: u32);
    /// Reset a rectangle to transparent
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);
    /// Fill a full circle with a solid color
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, width: f32, height: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
}

/// Surface that records every call (headless driver, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub size: (u32, u32),
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the log empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of circles recorded since the last `take`
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.commands.push(DrawCommand::Rect { x, y, width, height, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }
}
