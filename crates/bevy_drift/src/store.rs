use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use bevy::prelude::*;

/// Stable identity of a particle, assigned at insertion and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct ParticleId(u64);

impl ParticleId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ParticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One floating image instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub bitmap: Handle<Image>,
    /// Top-left corner in viewport pixels, y growing downwards.
    pub position: Vec2,
    pub size: Vec2,
}

/// A single entry of the per-frame draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub id: ParticleId,
    pub bitmap: Handle<Image>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Immutable view of the store at the moment it was taken.
///
/// Cloning is cheap. Mutating the store afterwards never changes a snapshot that
/// was already handed out.
#[derive(Debug, Clone, Default)]
pub struct Snapshot(Arc<Vec<Particle>>);

impl Deref for Snapshot {
    type Target = [Particle];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Ordered collection of particles, in insertion order.
///
/// The only mutation paths are [`insert`](Self::insert), [`update`](Self::update),
/// [`remove`](Self::remove) and [`replace`](Self::replace). Unknown ids are
/// ignored by every operation that takes one.
#[derive(Resource, Debug, Default)]
pub struct ParticleStore {
    particles: Snapshot,
    next_id: u64,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, bitmap: Handle<Image>, position: Vec2, size: Vec2) -> ParticleId {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "particle size must be positive");

        let id = ParticleId(self.next_id);
        self.next_id += 1;

        self.particles_mut().push(Particle {
            id,
            bitmap,
            position,
            size,
        });
        id
    }

    /// Applies `mutator` to the position of `id`. Returns `false` when the
    /// particle no longer exists.
    pub fn update(&mut self, id: ParticleId, mutator: impl FnOnce(&mut Vec2)) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        mutator(&mut self.particles_mut()[index].position);
        true
    }

    /// Removes `id`. Returns `false` when it was already gone.
    pub fn remove(&mut self, id: ParticleId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.particles_mut().remove(index);
        true
    }

    /// Publishes a whole new particle sequence in one step.
    ///
    /// Entries are matched by id: particles the store no longer holds are
    /// dropped, and particles missing from `next` keep their current state.
    /// Store order is preserved.
    pub fn replace(&mut self, next: Vec<Particle>) {
        let current = &self.particles;
        let same_layout = current.len() == next.len()
            && current.iter().zip(&next).all(|(a, b)| a.id == b.id);

        if same_layout {
            self.particles = Snapshot(Arc::new(next));
            return;
        }

        let mut by_id: HashMap<ParticleId, Particle> =
            next.into_iter().map(|p| (p.id, p)).collect();
        let merged = current
            .iter()
            .map(|p| by_id.remove(&p.id).unwrap_or_else(|| p.clone()))
            .collect();
        self.particles = Snapshot(Arc::new(merged));
    }

    pub fn snapshot(&self) -> Snapshot {
        self.particles.clone()
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Draw list in insertion order, later entries on top.
    pub fn render_list(&self) -> Vec<RenderItem> {
        self.particles
            .iter()
            .map(|p| RenderItem {
                id: p.id,
                bitmap: p.bitmap.clone(),
                x: p.position.x,
                y: p.position.y,
                width: p.size.x,
                height: p.size.y,
            })
            .collect()
    }

    fn index_of(&self, id: ParticleId) -> Option<usize> {
        self.particles.iter().position(|p| p.id == id)
    }

    // copy-on-write: outstanding snapshots keep the old sequence
    fn particles_mut(&mut self) -> &mut Vec<Particle> {
        Arc::make_mut(&mut self.particles.0)
    }
}

