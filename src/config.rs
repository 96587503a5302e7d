//! Field configuration
//!
//! A single bundle of the fixed constants in [`crate::consts`]. There is no
//! runtime override; `Default` is the configuration the page runs with.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::consts::*;

/// Parameters for populating and animating the blob field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of blobs created on every (re)population
    pub blob_count: usize,
    /// Radius range [min, max)
    pub radius_min: f32,
    pub radius_max: f32,
    /// Per-axis velocity bound; components are drawn from [-max, max)
    pub max_speed: f32,
    /// Off-screen travel allowed before a blob bounces
    pub edge_buffer: f32,
    /// Blob fill colors
    pub palette: Vec<Rgba>,
    /// Opaque base painted every frame
    pub base_color: Rgba,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            blob_count: BLOB_COUNT,
            radius_min: BLOB_RADIUS_MIN,
            radius_max: BLOB_RADIUS_MAX,
            max_speed: BLOB_MAX_SPEED,
            edge_buffer: EDGE_BUFFER,
            palette: PALETTE.to_vec(),
            base_color: BASE_COLOR,
        }
    }
}

impl FieldConfig {
    /// Every sampling range is non-empty with a finite width and there is a
    /// color to pick
    pub fn is_usable(&self) -> bool {
        let finite = self.radius_min.is_finite()
            && self.radius_max.is_finite()
            && self.max_speed.is_finite()
            && self.edge_buffer.is_finite();

        finite
            && self.radius_min < self.radius_max
            && (self.radius_max - self.radius_min).is_finite()
            && self.max_speed > 0.0
            && (2.0 * self.max_speed).is_finite()
            && !self.palette.is_empty()
    }

    /// Keep this config if it can populate a field, otherwise fall back to
    /// the defaults
    pub fn or_default(self) -> Self {
        if self.is_usable() {
            self
        } else {
            log::warn!("Ignoring unusable field config, using defaults");
            Self::default()
        }
    }
}
