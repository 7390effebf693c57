use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draws used for spawn and wrap positions.
#[derive(Resource)]
pub struct DriftRng(StdRng);

impl Default for DriftRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl DriftRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}
