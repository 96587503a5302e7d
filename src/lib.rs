//! Blob Field - drifting canvas background and page effects
//!
//! Core modules:
//! - `field`: Blob state, per-frame physics and re-population
//! - `animator`: Frame driver tying the field to a surface and a scheduler
//! - `surface`: Drawing surface abstraction (canvas / recording)
//! - `scheduler`: Display-refresh scheduling abstraction
//! - `effects`: Pure logic behind the page interaction effects
//! - `web`: Browser bindings (wasm32 only)

pub mod animator;
pub mod color;
pub mod config;
pub mod effects;
pub mod field;
pub mod scheduler;
pub mod surface;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use animator::Animator;
pub use color::Rgba;
pub use config::FieldConfig;
pub use field::{Blob, BlobField, Viewport};
pub use scheduler::{FixedTickScheduler, FrameScheduler};
pub use surface::{DrawCommand, RecordingSurface, Surface};

/// Fixed constants for the background and page effects
pub mod consts {
    use crate::color::Rgba;

    /// Number of blobs in the field
    pub const BLOB_COUNT: usize = 10;
    /// Blob radius range [min, max)
    pub const BLOB_RADIUS_MIN: f32 = 150.0;
    pub const BLOB_RADIUS_MAX: f32 = 350.0;
    /// Per-axis speed bound (pixels per frame); velocity is in [-max, max)
    pub const BLOB_MAX_SPEED: f32 = 0.75;
    /// Distance past the viewport edge a blob may travel before bouncing
    pub const EDGE_BUFFER: f32 = 100.0;

    /// Opaque base painted under the blobs (#fbf9f4)
    pub const BASE_COLOR: Rgba = Rgba::opaque(251, 249, 244);

    /// Blob fill colors
    pub const PALETTE: [Rgba; 4] = [
        Rgba::new(179, 139, 71, 0.4),  // Antique gold
        Rgba::new(139, 94, 60, 0.3),   // Wood brown
        Rgba::new(222, 184, 135, 0.4), // Burlywood
        Rgba::new(230, 204, 178, 0.5), // Soft beige
    ];

    /// Element id of the background canvas
    pub const CANVAS_ID: &str = "bg-canvas";

    /// Pixels above the bottom of the window an element must cross to reveal
    pub const REVEAL_OFFSET: f64 = 150.0;
    /// Maximum card tilt (degrees)
    pub const TILT_MAX_DEG: f64 = 10.0;
    /// Perspective distance for the card tilt (px)
    pub const TILT_PERSPECTIVE: f64 = 1000.0;
    /// Card scale while tilted
    pub const TILT_SCALE: f64 = 1.02;

    /// Chance a pointer move spawns a dust particle
    pub const DUST_CHANCE: f64 = 0.1;
    /// Dust particle size range [min, max) in px
    pub const DUST_SIZE_MIN: f64 = 2.0;
    pub const DUST_SIZE_MAX: f64 = 7.0;
    /// Dust drift span (px); offsets are in [-span/2, span/2)
    pub const DUST_DRIFT_SPAN: f64 = 50.0;
    /// Dust particle lifetime (ms)
    pub const DUST_LIFETIME_MS: i32 = 1000;

    /// Cursor outline follow duration (ms)
    pub const CURSOR_OUTLINE_LAG_MS: f64 = 500.0;
}
