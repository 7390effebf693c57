use super::helpers::*;

use bevy::prelude::*;
use bevy_drift::prelude::*;

#[test]
fn tick_moves_up_by_speed() {
    let (mut store, ids) = store_at(&[Vec2::new(100.0, 600.0)]);
    let engine = MotionEngine::default();

    let report = engine.tick(&mut store, 2.5, viewport_800x600(), fixed_draw(0.0));

    assert_eq!(position_of(&store, ids[0]), Vec2::new(100.0, 597.5));
    assert_eq!(
        report,
        TickReport {
            advanced: 1,
            wrapped: 0,
        }
    );
}

#[test]
fn drift_is_monotonic_until_wrap() {
    let (mut store, ids) = store_at(&[Vec2::new(100.0, 600.0)]);
    let engine = MotionEngine::default();
    let speed = 4.0;

    let mut previous = position_of(&store, ids[0]).y;
    for _ in 0..100 {
        engine.tick(&mut store, speed, viewport_800x600(), fixed_draw(0.0));
        let current = position_of(&store, ids[0]);
        assert_eq!(current.y, previous - speed);
        assert_eq!(current.x, 100.0, "x must not change between wraps");
        previous = current.y;
    }
}

#[test]
fn wraps_to_bottom_with_fresh_x() {
    let (mut store, ids) = store_at(&[Vec2::new(100.0, -249.0)]);
    let engine = MotionEngine::default();

    let report = engine.tick(&mut store, 1.0, viewport_800x600(), fixed_draw(0.5));

    assert_eq!(position_of(&store, ids[0]), Vec2::new(325.0, 600.0));
    assert_eq!(report.wrapped, 1);
}

#[test]
fn does_not_wrap_above_exit_margin() {
    let (mut store, ids) = store_at(&[Vec2::new(100.0, -248.0)]);
    MotionEngine::default().tick(&mut store, 1.0, viewport_800x600(), fixed_draw(0.5));
    assert_eq!(position_of(&store, ids[0]), Vec2::new(100.0, -249.0));
}

#[test]
fn never_stays_below_exit_margin() {
    let (mut store, ids) = store_at(&[Vec2::new(0.0, 600.0), Vec2::new(400.0, 10.0)]);
    let engine = MotionEngine::default();
    let draws = [0.1, 0.9, 0.4, 0.7];
    let mut draw = draw_sequence(&draws);

    for _ in 0..2_000 {
        engine.tick(&mut store, 7.3, viewport_800x600(), &mut draw);
        for id in &ids {
            assert!(position_of(&store, *id).y > -250.0);
        }
    }
}

#[test]
fn large_speed_wraps_in_one_tick() {
    let (mut store, ids) = store_at(&[Vec2::new(0.0, 100.0)]);
    MotionEngine::default().tick(&mut store, 400.0, viewport_800x600(), fixed_draw(0.0));
    assert_eq!(position_of(&store, ids[0]), Vec2::new(0.0, 600.0));
}

#[test]
fn wrap_skips_the_overlap_check() {
    let (mut store, ids) = store_at(&[Vec2::new(0.0, 600.0), Vec2::new(0.0, -250.0 + 1.0)]);
    MotionEngine::default().tick(&mut store, 1.0, viewport_800x600(), fixed_draw(0.0));

    // the first particle moved to y = 599, the wrapped one lands at (0, 600)
    assert_eq!(position_of(&store, ids[1]), Vec2::new(0.0, 600.0));
    assert_eq!(store.len(), 2);
}

#[test]
fn custom_exit_margin() {
    let (mut store, ids) = store_at(&[Vec2::new(10.0, 0.5)]);
    MotionEngine::new(0.0).tick(&mut store, 1.0, viewport_800x600(), fixed_draw(0.0));
    assert_eq!(position_of(&store, ids[0]).y, 600.0);
}

#[test]
fn advance_leaves_input_untouched() {
    let (store, _) = store_at(&[Vec2::new(10.0, 300.0)]);
    let snapshot = store.snapshot();

    let (next, _) = MotionEngine::default().advance(
        &snapshot,
        1.0,
        viewport_800x600(),
        fixed_draw(0.0),
    );

    assert_eq!(snapshot[0].position.y, 300.0);
    assert_eq!(next[0].position.y, 299.0);
    assert_eq!(next[0].id, snapshot[0].id);
    assert_eq!(next[0].size, snapshot[0].size);
}

#[test]
fn draws_only_for_wrapping_particles() {
    let (mut store, _) = store_at(&[Vec2::new(0.0, 600.0), Vec2::new(300.0, -250.0)]);
    let mut calls = 0;

    MotionEngine::default().tick(&mut store, 1.0, viewport_800x600(), || {
        calls += 1;
        0.0
    });

    assert_eq!(calls, 1);
}

#[test]
fn uses_current_viewport_on_wrap() {
    let (mut store, ids) = store_at(&[Vec2::new(0.0, -250.0)]);
    MotionEngine::default().tick(
        &mut store,
        1.0,
        ViewportSize::new(1150.0, 900.0),
        fixed_draw(0.5),
    );
    assert_eq!(position_of(&store, ids[0]), Vec2::new(500.0, 900.0));
}
