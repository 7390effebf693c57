use std::collections::{HashMap, HashSet};

use bevy::picking::prelude::Pickable;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::interaction::Dragging;
use crate::store::{ParticleId, ParticleStore};
use crate::viewport::ViewportSize;

// z offset between consecutive particles so later inserts draw on top
const DRAW_ORDER_STEP: f32 = 0.001;

/// Marks the sprite entity that displays a particle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleSprite(pub ParticleId);

pub fn draw_depth(index: usize) -> f32 {
    index as f32 * DRAW_ORDER_STEP
}

/// Mirrors the store's render list onto sprite entities.
///
/// Spawns sprites for new particles, despawns sprites whose particle is gone
/// and moves the rest. A sprite that is being dragged keeps the position the
/// pointer gives it until the drag ends.
pub fn sync_particle_sprites(
    mut commands: Commands,
    store: Res<ParticleStore>,
    viewport: Res<ViewportSize>,
    mut sprites: Query<(Entity, &ParticleSprite, &mut Transform, Has<Dragging>)>,
) {
    if !store.is_changed() && !viewport.is_changed() {
        return;
    }

    let items = store.render_list();
    let order: HashMap<ParticleId, usize> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (item.id, index))
        .collect();

    let mut displayed = HashSet::new();
    for (entity, sprite, mut transform, dragging) in &mut sprites {
        let Some(&index) = order.get(&sprite.0) else {
            commands.entity(entity).despawn();
            continue;
        };
        displayed.insert(sprite.0);

        if dragging {
            transform.translation.z = draw_depth(index);
            continue;
        }

        let item = &items[index];
        transform.translation = viewport
            .to_world(Vec2::new(item.x, item.y))
            .extend(draw_depth(index));
    }

    for (index, item) in items.iter().enumerate() {
        if displayed.contains(&item.id) {
            continue;
        }

        let translation = viewport
            .to_world(Vec2::new(item.x, item.y))
            .extend(draw_depth(index));

        commands.spawn((
            ParticleSprite(item.id),
            Name::new(format!("Particle {}", item.id)),
            Sprite {
                image: item.bitmap.clone(),
                custom_size: Some(Vec2::new(item.width, item.height)),
                ..default()
            },
            Anchor::TOP_LEFT,
            Transform::from_translation(translation),
            Pickable::default(),
        ));
    }
}
