use bevy::prelude::*;

use crate::controls::AnimationControl;
use crate::random::DriftRng;
use crate::settings::DriftSettings;
use crate::store::{Particle, ParticleStore};
use crate::viewport::ViewportSize;

/// How far above the top edge a particle travels before it wraps.
pub const DEFAULT_EXIT_MARGIN: f32 = 250.0;

/// Summary of a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub advanced: usize,
    pub wrapped: usize,
}

/// Constant-velocity upward drift with wrap-around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEngine {
    pub exit_margin: f32,
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self {
            exit_margin: DEFAULT_EXIT_MARGIN,
        }
    }
}

impl MotionEngine {
    pub fn new(exit_margin: f32) -> Self {
        Self { exit_margin }
    }

    /// Computes the next sequence from `particles` without touching the store.
    ///
    /// `speed` is taken as is; range checks belong to the control input. A
    /// wrapped particle gets a fresh `x` with no overlap check.
    pub fn advance(
        &self,
        particles: &[Particle],
        speed: f32,
        viewport: ViewportSize,
        mut draw: impl FnMut() -> f32,
    ) -> (Vec<Particle>, TickReport) {
        let mut report = TickReport::default();

        let next: Vec<Particle> = particles
            .iter()
            .map(|particle| {
                let mut particle = particle.clone();
                let y = particle.position.y - speed;

                if y <= -self.exit_margin {
                    particle.position = Vec2::new(
                        viewport.random_x(particle.size.x, draw()),
                        viewport.height,
                    );
                    report.wrapped += 1;
                } else {
                    particle.position.y = y;
                }

                report.advanced += 1;
                particle
            })
            .collect();

        (next, report)
    }

    /// Reads the store, advances every particle and publishes the result.
    ///
    /// Holding `&mut ParticleStore` for the whole call keeps the read and the
    /// replace together, so no drag or removal can land in between.
    pub fn tick(
        &self,
        store: &mut ParticleStore,
        speed: f32,
        viewport: ViewportSize,
        draw: impl FnMut() -> f32,
    ) -> TickReport {
        let snapshot = store.snapshot();
        let (next, report) = self.advance(&snapshot, speed, viewport, draw);
        store.replace(next);
        report
    }
}

pub fn advance_particles(
    settings: Res<DriftSettings>,
    control: Res<AnimationControl>,
    viewport: Res<ViewportSize>,
    mut store: ResMut<ParticleStore>,
    mut rng: ResMut<DriftRng>,
) {
    if store.is_empty() {
        return;
    }

    let engine = MotionEngine::new(settings.exit_margin);
    let report = engine.tick(&mut store, control.speed(), *viewport, || rng.unit());

    if report.wrapped > 0 {
        debug!("{} particle(s) wrapped to the bottom edge", report.wrapped);
    }
}
