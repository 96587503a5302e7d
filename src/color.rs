//! Fill colors for the drawing surface

use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB color with straight alpha, rendered as a CSS color string
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity (0.0 - 1.0)
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// CSS representation (`rgb(..)` when opaque, `rgba(..)` otherwise)
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BASE_COLOR, PALETTE};

    #[test]
    fn test_css_strings() {
        assert_eq!(PALETTE[0].to_css(), "rgba(179, 139, 71, 0.4)");
        assert_eq!(PALETTE[3].to_css(), "rgba(230, 204, 178, 0.5)");
        assert_eq!(BASE_COLOR.to_css(), "rgb(251, 249, 244)");
    }

    #[test]
    fn test_palette_is_translucent() {
        assert!(PALETTE.iter().all(|c| !c.is_opaque() && c.a > 0.0));
        assert!(BASE_COLOR.is_opaque());
    }
}
