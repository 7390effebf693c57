use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Size of the drawing surface in logical pixels.
///
/// Placement and motion take this explicitly; inside an app it is refreshed
/// from the primary window every frame by [`track_primary_window`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal position for a particle of `width`, given a uniform draw in `[0, 1)`.
    ///
    /// Clamps to zero when the particle is wider than the viewport.
    pub fn random_x(&self, width: f32, draw: f32) -> f32 {
        draw * (self.width - width).max(0.0)
    }

    /// Converts a top-left-origin viewport position into 2D world space, where
    /// the camera sits at the origin and y points up.
    pub fn to_world(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x - self.width / 2.0,
            self.height / 2.0 - position.y,
        )
    }

    pub fn from_world(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.width / 2.0, self.height / 2.0 - world.y)
    }
}

pub fn track_primary_window(
    window: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    let Ok(window) = window.single() else {
        return;
    };

    let size = ViewportSize::new(window.width(), window.height());
    if *viewport != size {
        *viewport = size;
    }
}
