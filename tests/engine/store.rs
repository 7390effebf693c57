use super::helpers::*;

use bevy::prelude::*;
use bevy_drift::prelude::*;

#[test]
fn insert_appends_in_order() {
    let (store, ids) = store_at(&[Vec2::new(0.0, 600.0), Vec2::new(300.0, 600.0)]);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id, ids[0]);
    assert_eq!(snapshot[1].id, ids[1]);
}

#[test]
fn ids_are_unique_and_never_reused() {
    let (mut store, ids) = store_at(&[Vec2::ZERO, Vec2::new(400.0, 0.0)]);
    assert_ne!(ids[0], ids[1]);

    store.remove(ids[1]);
    let fresh = store.insert(Handle::default(), Vec2::ZERO, PARTICLE_SIZE);
    assert!(!ids.contains(&fresh), "removed ids must not come back");
}

#[test]
fn update_moves_only_the_target() {
    let (mut store, ids) = store_at(&[Vec2::new(10.0, 20.0), Vec2::new(400.0, 20.0)]);
    assert!(store.update(ids[0], |p| *p = Vec2::new(42.0, 99.0)));
    assert_eq!(position_of(&store, ids[0]), Vec2::new(42.0, 99.0));
    assert_eq!(position_of(&store, ids[1]), Vec2::new(400.0, 20.0));
}

#[test]
fn update_of_removed_id_is_a_noop() {
    let (mut store, ids) = store_at(&[Vec2::ZERO]);
    store.remove(ids[0]);

    assert!(!store.update(ids[0], |p| *p = Vec2::ONE));
    assert!(store.is_empty(), "update must not reinsert a removed particle");
}

#[test]
fn remove_is_idempotent() {
    let (mut once, once_ids) = store_at(&[Vec2::ZERO, Vec2::new(300.0, 0.0)]);
    let (mut twice, twice_ids) = store_at(&[Vec2::ZERO, Vec2::new(300.0, 0.0)]);

    assert!(once.remove(once_ids[0]));
    assert!(twice.remove(twice_ids[0]));
    assert!(!twice.remove(twice_ids[0]));

    assert_eq!(once.len(), twice.len());
    assert_eq!(
        position_of(&once, once_ids[1]),
        position_of(&twice, twice_ids[1])
    );
}

#[test]
fn snapshot_is_not_affected_by_later_mutation() {
    let (mut store, ids) = store_at(&[Vec2::new(0.0, 600.0)]);
    let before = store.snapshot();

    store.update(ids[0], |p| p.y = 0.0);
    store.insert(Handle::default(), Vec2::new(500.0, 600.0), PARTICLE_SIZE);

    assert_eq!(before.len(), 1);
    assert_eq!(before[0].position, Vec2::new(0.0, 600.0));
    assert_eq!(store.snapshot().len(), 2);
}

#[test]
fn replace_publishes_new_positions() {
    let (mut store, ids) = store_at(&[Vec2::new(0.0, 600.0), Vec2::new(300.0, 600.0)]);
    let mut next = store.snapshot().to_vec();
    for particle in &mut next {
        particle.position.y -= 5.0;
    }
    store.replace(next);

    assert_eq!(position_of(&store, ids[0]).y, 595.0);
    assert_eq!(position_of(&store, ids[1]).y, 595.0);
}

#[test]
fn replace_does_not_resurrect_removed_particles() {
    let (mut store, ids) = store_at(&[Vec2::ZERO, Vec2::new(300.0, 0.0), Vec2::new(600.0, 0.0)]);
    let next = store.snapshot().to_vec();

    store.remove(ids[1]);
    store.replace(next);

    assert_eq!(store.len(), 2);
    assert!(!store.contains(ids[1]));
}

#[test]
fn replace_keeps_particles_missing_from_the_sequence() {
    let (mut store, ids) = store_at(&[Vec2::ZERO]);
    let next = store.snapshot().to_vec();

    let late = store.insert(Handle::default(), Vec2::new(500.0, 600.0), PARTICLE_SIZE);
    store.replace(next);

    assert_eq!(store.len(), 2);
    assert!(store.contains(ids[0]));
    assert_eq!(position_of(&store, late), Vec2::new(500.0, 600.0));
}

#[test]
fn render_list_follows_insertion_order() {
    let (mut store, ids) = store_at(&[
        Vec2::new(0.0, 100.0),
        Vec2::new(300.0, 200.0),
        Vec2::new(600.0, 300.0),
    ]);
    store.remove(ids[1]);

    let list = store.render_list();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, ids[0]);
    assert_eq!(list[1].id, ids[2]);
    assert_eq!((list[1].x, list[1].y), (600.0, 300.0));
    assert_eq!((list[1].width, list[1].height), (150.0, 250.0));
}
