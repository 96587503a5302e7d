//! 3D tilt for glass cards

use crate::consts::{TILT_MAX_DEG, TILT_PERSPECTIVE, TILT_SCALE};

/// Card rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt toward a pointer at `(x, y)` relative to a `width` x `height`
    /// card. The card edges map to the full `TILT_MAX_DEG`.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        if center_x <= 0.0 || center_y <= 0.0 {
            return Self::default();
        }

        Self {
            rotate_x: ((y - center_y) / center_y) * -TILT_MAX_DEG,
            rotate_y: ((x - center_x) / center_x) * TILT_MAX_DEG,
        }
    }

    /// Inline `transform` while the pointer is over the card
    pub fn transform_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({}, {}, {})",
            TILT_PERSPECTIVE, self.rotate_x, self.rotate_y, TILT_SCALE, TILT_SCALE, TILT_SCALE
        )
    }

    /// Inline `transform` once the pointer leaves
    pub fn rest_css() -> String {
        format!(
            "perspective({}px) rotateX(0) rotateY(0) scale3d(1, 1, 1)",
            TILT_PERSPECTIVE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        let tilt = Tilt::from_pointer(150.0, 100.0, 300.0, 200.0);
        assert_eq!(tilt.rotate_x.abs(), 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn test_corners_hit_max() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 300.0, 200.0);
        assert_eq!(top_left.rotate_x, 10.0);
        assert_eq!(top_left.rotate_y, -10.0);

        let bottom_right = Tilt::from_pointer(300.0, 200.0, 300.0, 200.0);
        assert_eq!(bottom_right.rotate_x, -10.0);
        assert_eq!(bottom_right.rotate_y, 10.0);
    }

    #[test]
    fn test_degenerate_card() {
        assert_eq!(Tilt::from_pointer(5.0, 5.0, 0.0, 0.0), Tilt::default());
    }

    #[test]
    fn test_css() {
        let tilt = Tilt {
            rotate_x: 5.0,
            rotate_y: -2.5,
        };
        assert_eq!(
            tilt.transform_css(),
            "perspective(1000px) rotateX(5deg) rotateY(-2.5deg) scale3d(1.02, 1.02, 1.02)"
        );
        assert_eq!(
            Tilt::rest_css(),
            "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)"
        );
    }
}
