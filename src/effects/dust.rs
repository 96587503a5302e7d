//! Gold dust cursor trail

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::px;
use crate::consts::{DUST_CHANCE, DUST_DRIFT_SPAN, DUST_SIZE_MAX, DUST_SIZE_MIN};

/// A short-lived particle dropped at the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DustParticle {
    pub x: f64,
    pub y: f64,
    /// Edge length (px)
    pub size: f64,
    /// Offset the particle drifts toward while fading
    pub drift_x: f64,
    pub drift_y: f64,
}

impl DustParticle {
    /// Inline style properties as `(name, value)` pairs
    pub fn style(&self) -> [(&'static str, String); 6] {
        [
            ("width", px(self.size)),
            ("height", px(self.size)),
            ("left", px(self.x)),
            ("top", px(self.y)),
            ("--drift-x", px(self.drift_x)),
            ("--drift-y", px(self.drift_y)),
        ]
    }
}

/// Spawns dust on a fraction of pointer moves
#[derive(Debug, Clone)]
pub struct DustTrail<R: Rng = Pcg32> {
    rng: R,
}

impl DustTrail<Pcg32> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> DustTrail<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Roll for a particle at the pointer position
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<DustParticle> {
        if !self.rng.random_bool(DUST_CHANCE) {
            return None;
        }

        let half = DUST_DRIFT_SPAN / 2.0;
        Some(DustParticle {
            x,
            y,
            size: self.rng.random_range(DUST_SIZE_MIN..DUST_SIZE_MAX),
            drift_x: self.rng.random_range(-half..half),
            drift_y: self.rng.random_range(-half..half),
        })
    }
}
