use bevy::prelude::*;

use crate::store::Particle;
use crate::viewport::ViewportSize;

/// Minimum distance between top-left anchors of a new particle and every
/// existing one. Matches the default particle height.
pub const DEFAULT_OVERLAP_DISTANCE: f32 = 250.0;

/// Outcome of a placement decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    Accepted { position: Vec2, attempts: u32 },
    Rejected { attempts: u32 },
}

impl Placement {
    pub fn position(&self) -> Option<Vec2> {
        match self {
            Placement::Accepted { position, .. } => Some(*position),
            Placement::Rejected { .. } => None,
        }
    }
}

/// Decides where a new particle spawns and whether it may spawn at all.
///
/// Candidates sit on the bottom edge of the viewport (`y = H`) at a random `x`.
/// A candidate closer than `overlap_distance` to any existing particle is
/// rejected. With `attempts == 1` a single bad draw discards the image; larger
/// values retry with fresh independent draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPolicy {
    pub overlap_distance: f32,
    pub attempts: u32,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            overlap_distance: DEFAULT_OVERLAP_DISTANCE,
            attempts: 1,
        }
    }
}

impl PlacementPolicy {
    pub fn candidate(viewport: ViewportSize, size: Vec2, draw: f32) -> Vec2 {
        Vec2::new(viewport.random_x(size.x, draw), viewport.height)
    }

    pub fn overlaps(&self, candidate: Vec2, particles: &[Particle]) -> bool {
        particles
            .iter()
            .any(|p| p.position.distance(candidate) < self.overlap_distance)
    }

    pub fn place(
        &self,
        viewport: ViewportSize,
        size: Vec2,
        particles: &[Particle],
        mut draw: impl FnMut() -> f32,
    ) -> Placement {
        let attempts = self.attempts.max(1);
        for attempt in 1..=attempts {
            let candidate = Self::candidate(viewport, size, draw());
            if !self.overlaps(candidate, particles) {
                return Placement::Accepted {
                    position: candidate,
                    attempts: attempt,
                };
            }
        }
        Placement::Rejected { attempts }
    }
}
