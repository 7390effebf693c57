use bevy::picking::events::{Click, Drag, DragEnd, DragStart, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use crate::render::ParticleSprite;
use crate::settings::DriftSettings;
use crate::store::{ParticleId, ParticleStore};
use crate::viewport::ViewportSize;

/// How far, in pixels, the pointer may wander between press and release
/// and still count as a click rather than a drag.
pub const CLICK_TOLERANCE: f32 = 4.0;

/// Present on a particle sprite while the pointer is dragging it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Dragging {
    /// Pointer position minus the particle's top-left corner at drag start.
    pub grab_offset: Vec2,
    /// Pointer position when the drag started.
    pub origin: Vec2,
}

impl Dragging {
    /// Whether releasing the pointer at `pointer` ends a real drag. Jitter
    /// within [`CLICK_TOLERANCE`] of the origin is still a click.
    pub fn is_drag_release(&self, pointer: Vec2) -> bool {
        self.origin.distance(pointer) > CLICK_TOLERANCE
    }
}

/// Detects double-clicks from the stream of single clicks.
#[derive(Resource, Debug, Default)]
pub struct ClickTracker {
    last: Option<(ParticleId, f64)>,
}

impl ClickTracker {
    /// Records a click on `id` at `now` seconds. Returns `true` when it
    /// completes a double-click, i.e. follows a click on the same particle
    /// within `window` seconds.
    pub fn register(&mut self, id: ParticleId, now: f64, window: f64) -> bool {
        match self.last {
            Some((last_id, at)) if last_id == id && now - at <= window => {
                self.last = None;
                true
            }
            _ => {
                self.last = Some((id, now));
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Moves a particle to where it was dropped. The position holds until the
/// next tick; an id that was deleted meanwhile is ignored.
pub fn apply_drag_end(store: &mut ParticleStore, id: ParticleId, position: Vec2) -> bool {
    store.update(id, |current| *current = position)
}

pub fn apply_double_click(store: &mut ParticleStore, id: ParticleId) -> bool {
    store.remove(id)
}

pub fn on_particle_drag_start(
    event: On<Pointer<DragStart>>,
    mut commands: Commands,
    sprites: Query<&ParticleSprite>,
    store: Res<ParticleStore>,
) {
    if event.button != PointerButton::Primary {
        return;
    }
    let Ok(sprite) = sprites.get(event.event_target()) else {
        return;
    };
    let Some(particle) = store.get(sprite.0) else {
        return;
    };

    let origin = event.pointer_location.position;
    commands.entity(event.event_target()).try_insert(Dragging {
        grab_offset: origin - particle.position,
        origin,
    });
}

pub fn on_particle_drag(
    event: On<Pointer<Drag>>,
    viewport: Res<ViewportSize>,
    mut sprites: Query<(&Dragging, &mut Transform), With<ParticleSprite>>,
) {
    if event.button != PointerButton::Primary {
        return;
    }
    let Ok((dragging, mut transform)) = sprites.get_mut(event.event_target()) else {
        return;
    };

    let world = viewport.to_world(event.pointer_location.position - dragging.grab_offset);
    transform.translation.x = world.x;
    transform.translation.y = world.y;
}

pub fn on_particle_drag_end(
    event: On<Pointer<DragEnd>>,
    mut commands: Commands,
    sprites: Query<(&ParticleSprite, &Dragging)>,
    mut store: ResMut<ParticleStore>,
) {
    if event.button != PointerButton::Primary {
        return;
    }
    let entity = event.event_target();
    let Ok((sprite, dragging)) = sprites.get(entity) else {
        return;
    };

    let position = event.pointer_location.position - dragging.grab_offset;
    if apply_drag_end(&mut store, sprite.0, position) {
        debug!("particle {} dragged to {position}", sprite.0);
    }
    commands.entity(entity).try_remove::<Dragging>();
}

/// Bevy emits a click on every release over the pressed sprite, before the
/// matching drag end, so a sprite still carrying [`Dragging`] here is being
/// released from a drag.
pub fn on_particle_click(
    event: On<Pointer<Click>>,
    time: Res<Time>,
    settings: Res<DriftSettings>,
    sprites: Query<(&ParticleSprite, Option<&Dragging>)>,
    mut clicks: ResMut<ClickTracker>,
    mut store: ResMut<ParticleStore>,
) {
    if event.button != PointerButton::Primary {
        return;
    }
    let Ok((sprite, dragging)) = sprites.get(event.event_target()) else {
        return;
    };
    if dragging.is_some_and(|drag| drag.is_drag_release(event.pointer_location.position)) {
        clicks.reset();
        return;
    }

    let now = time.elapsed_secs_f64();
    let window = f64::from(settings.double_click_window);
    if clicks.register(sprite.0, now, window) && apply_double_click(&mut store, sprite.0) {
        info!("particle {} removed", sprite.0);
    }
}
