//! A single drifting blob

use glam::Vec2;
use rand::Rng;

use super::state::Viewport;
use crate::color::Rgba;
use crate::config::FieldConfig;
use crate::surface::Surface;

/// A translucent circle with fixed radius and color
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    /// Center position (unbounded, may sit off-screen)
    pub pos: Vec2,
    /// Pixels per frame; only the sign of each axis ever changes
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Blob {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Create a blob with random radius, color and velocity, placed anywhere
    /// inside the viewport
    pub fn random<R: Rng>(rng: &mut R, viewport: Viewport, config: &FieldConfig) -> Self {
        let radius = rng.random_range(config.radius_min..config.radius_max);
        let color = config.palette[rng.random_range(0..config.palette.len())];
        let vel = Vec2::new(
            rng.random_range(-config.max_speed..config.max_speed),
            rng.random_range(-config.max_speed..config.max_speed),
        );
        let pos = Vec2::new(
            sample_extent(rng, viewport.width),
            sample_extent(rng, viewport.height),
        );

        Self::new(pos, vel, radius, color)
    }

    /// Advance one frame, then bounce on any axis outside the buffered
    /// viewport. Position is never clamped, so a blob that is still outside
    /// on the next frame flips again.
    pub fn update(&mut self, viewport: Viewport, edge_buffer: f32) {
        self.pos += self.vel;

        let (w, h) = viewport.size();
        if self.pos.x < -edge_buffer || self.pos.x > w + edge_buffer {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < -edge_buffer || self.pos.y > h + edge_buffer {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}

/// Uniform in [0, extent); a zero-sized axis pins to 0
fn sample_extent<R: Rng>(rng: &mut R, extent: u32) -> f32 {
    if extent == 0 {
        0.0
    } else {
        rng.random_range(0.0..extent as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{EDGE_BUFFER, PALETTE};
    use crate::surface::{DrawCommand, RecordingSurface};

    fn blob_at(x: f32, y: f32, vx: f32, vy: f32) -> Blob {
        Blob::new(Vec2::new(x, y), Vec2::new(vx, vy), 200.0, PALETTE[0])
    }

    #[test]
    fn test_update_moves_by_velocity() {
        let mut blob = blob_at(500.0, 300.0, 0.5, -0.25);
        blob.update(Viewport::new(1000, 800), EDGE_BUFFER);
        assert_eq!(blob.pos, Vec2::new(500.5, 299.75));
        assert_eq!(blob.vel, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn test_bounce_after_moving() {
        // Position updates before the bounce check in the same step
        let mut blob = blob_at(-150.0, 400.0, -0.4, 0.0);
        blob.update(Viewport::new(1000, 800), EDGE_BUFFER);
        assert!((blob.pos.x - -150.4).abs() < 1e-4);
        assert_eq!(blob.vel.x, 0.4);
        assert_eq!(blob.vel.y, 0.0);
    }

    #[test]
    fn test_bounce_far_edge() {
        let mut blob = blob_at(700.0, 1100.6, 0.0, 0.5);
        blob.update(Viewport::new(1000, 1000), EDGE_BUFFER);
        assert_eq!(blob.vel.y, -0.5);
    }

    #[test]
    fn test_buffer_edge_is_inclusive() {
        // Exactly on the buffered edge is still inside
        let mut blob = blob_at(-99.5, 0.0, -0.5, 0.0);
        blob.update(Viewport::new(1000, 1000), EDGE_BUFFER);
        assert_eq!(blob.pos.x, -100.0);
        assert_eq!(blob.vel.x, -0.5);
    }

    #[test]
    fn test_flips_every_frame_while_outside() {
        // A blob deep outside the buffer oscillates in place
        let mut blob = blob_at(-300.0, 100.0, -0.5, 0.0);
        let viewport = Viewport::new(1000, 1000);

        blob.update(viewport, EDGE_BUFFER);
        assert_eq!(blob.vel.x, 0.5);
        blob.update(viewport, EDGE_BUFFER);
        assert_eq!(blob.vel.x, -0.5);
        assert_eq!(blob.pos.x, -300.0);
    }

    #[test]
    fn test_draw_uses_fixed_color() {
        let blob = blob_at(10.0, 20.0, 0.0, 0.0);
        let mut surface = RecordingSurface::new();
        blob.draw(&mut surface);
        assert_eq!(
            surface.commands,
            vec![DrawCommand::Circle {
                center: Vec2::new(10.0, 20.0),
                radius: 200.0,
                color: PALETTE[0],
            }]
        );
    }
}
