//! Page interaction effects
//!
//! Pure logic only: thresholds, geometry and the CSS strings each effect
//! writes. The browser wiring lives in `web::page`. None of these share
//! state with the blob field.

pub mod cursor;
pub mod dust;
pub mod nav;
pub mod reveal;
pub mod tilt;

pub use dust::{DustParticle, DustTrail};
pub use nav::{SectionBounds, active_section, link_matches};
pub use reveal::should_reveal;
pub use tilt::Tilt;

/// Format a pixel length for inline styles
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
