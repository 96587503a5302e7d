//! Blob field state: viewport plus the blob collection

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::blob::Blob;
use crate::config::FieldConfig;
use crate::surface::Surface;

/// Visible area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions as floats for physics
    pub fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

/// The full set of blobs and the viewport they bounce within
#[derive(Debug, Clone)]
pub struct BlobField<R: Rng = Pcg32> {
    config: FieldConfig,
    viewport: Viewport,
    /// Drawn in insertion order
    blobs: Vec<Blob>,
    rng: R,
}

impl BlobField<Pcg32> {
    /// Create a populated field with a seeded generator
    pub fn seeded(seed: u64, viewport: Viewport, config: FieldConfig) -> Self {
        Self::new(Pcg32::seed_from_u64(seed), viewport, config)
    }
}

impl<R: Rng> BlobField<R> {
    /// Create a field and populate it. A config that cannot populate a field
    /// is replaced by the defaults.
    pub fn new(rng: R, viewport: Viewport, config: FieldConfig) -> Self {
        let mut field = Self {
            config: config.or_default(),
            viewport,
            blobs: Vec::new(),
            rng,
        };
        field.initialize_blobs();
        field
    }

    /// Replace every blob with a freshly randomized one
    pub fn initialize_blobs(&mut self) {
        let viewport = self.viewport;
        let config = &self.config;
        let rng = &mut self.rng;
        self.blobs = (0..config.blob_count)
            .map(|_| Blob::random(&mut *rng, viewport, config))
            .collect();
        log::debug!(
            "Populated {} blobs for {}x{}",
            self.blobs.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Adopt new viewport dimensions and re-populate
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.initialize_blobs();
    }

    /// Advance then draw each blob in order
    pub fn step_and_draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let viewport = self.viewport;
        let edge_buffer = self.config.edge_buffer;
        for blob in &mut self.blobs {
            blob.update(viewport, edge_buffer);
            blob.draw(surface);
        }
    }

    /// Paint the opaque base over the whole viewport
    pub fn paint_base<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = self.viewport.size();
        surface.clear_rect(0.0, 0.0, w, h);
        surface.fill_rect(0.0, 0.0, w, h, self.config.base_color);
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PALETTE;

    fn assert_in_range(field: &BlobField) {
        let (w, h) = field.viewport().size();
        for blob in field.blobs() {
            assert!((150.0..350.0).contains(&blob.radius), "radius {}", blob.radius);
            assert!((-0.75..0.75).contains(&blob.vel.x));
            assert!((-0.75..0.75).contains(&blob.vel.y));
            assert!((0.0..w).contains(&blob.pos.x));
            assert!((0.0..h).contains(&blob.pos.y));
            assert!(PALETTE.contains(&blob.color));
        }
    }

    #[test]
    fn test_full_hd_population() {
        let field = BlobField::seeded(12345, Viewport::new(1920, 1080), FieldConfig::default());
        assert_eq!(field.blobs().len(), 10);
        assert_in_range(&field);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = BlobField::seeded(7, Viewport::new(800, 600), FieldConfig::default());
        let b = BlobField::seeded(7, Viewport::new(800, 600), FieldConfig::default());
        assert_eq!(a.blobs(), b.blobs());
    }

    #[test]
    fn test_resize_replaces_all_blobs() {
        let mut field = BlobField::seeded(99, Viewport::new(800, 600), FieldConfig::default());
        let before = field.blobs().to_vec();

        field.resize(Viewport::new(1600, 900));

        assert_eq!(field.viewport(), Viewport::new(1600, 900));
        assert_eq!(field.blobs().len(), 10);
        assert_in_range(&field);
        for old in &before {
            assert!(!field.blobs().contains(old));
        }
    }

    #[test]
    fn test_zero_viewport_pins_to_origin() {
        let field = BlobField::seeded(1, Viewport::new(0, 0), FieldConfig::default());
        assert_eq!(field.blobs().len(), 10);
        assert!(field.blobs().iter().all(|b| b.pos.x == 0.0 && b.pos.y == 0.0));
    }

    #[test]
    fn test_unusable_config_populates_defaults() {
        let wide_speed = FieldConfig {
            max_speed: f32::INFINITY,
            ..FieldConfig::default()
        };
        let field = BlobField::seeded(1, Viewport::new(800, 600), wide_speed);
        assert_eq!(field.config(), &FieldConfig::default());
        assert_eq!(field.blobs().len(), 10);
        assert_in_range(&field);

        let wide_radius = FieldConfig {
            radius_min: -3e38,
            radius_max: 3e38,
            ..FieldConfig::default()
        };
        let field = BlobField::seeded(1, Viewport::new(800, 600), wide_radius);
        assert_eq!(field.config(), &FieldConfig::default());
        assert_in_range(&field);
    }

    #[test]
    fn test_paint_base_covers_viewport() {
        use crate::consts::BASE_COLOR;
        use crate::surface::{DrawCommand, RecordingSurface};

        let field = BlobField::seeded(3, Viewport::new(640, 480), FieldConfig::default());
        let mut surface = RecordingSurface::new();
        field.paint_base(&mut surface);
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Clear { x: 0.0, y: 0.0, width: 640.0, height: 480.0 },
                DrawCommand::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: 640.0,
                    height: 480.0,
                    color: BASE_COLOR,
                },
            ]
        );
    }
}
