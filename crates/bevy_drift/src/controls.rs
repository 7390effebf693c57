use bevy::prelude::*;

pub const MIN_SPEED: f32 = 0.1;
pub const MAX_SPEED: f32 = 10.0;
pub const SPEED_STEP: f32 = 0.1;

/// User-facing animation controls: the play/pause toggle and the drift speed.
///
/// This is the input side, so it owns range checks: speeds are clamped to
/// `[MIN_SPEED, MAX_SPEED]` and snapped to `SPEED_STEP`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AnimationControl {
    animating: bool,
    speed: f32,
}

impl Default for AnimationControl {
    fn default() -> Self {
        Self {
            animating: true,
            speed: 1.0,
        }
    }
}

impl AnimationControl {
    pub fn new(animating: bool, speed: f32) -> Self {
        Self {
            animating,
            speed: clamp_speed(speed),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn pause(&mut self) {
        self.animating = false;
    }

    pub fn resume(&mut self) {
        self.animating = true;
    }

    pub fn toggle(&mut self) {
        self.animating = !self.animating;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = clamp_speed(speed);
    }

    /// Moves the speed by `steps` increments of [`SPEED_STEP`].
    pub fn step_speed(&mut self, steps: i32) {
        self.set_speed(self.speed + steps as f32 * SPEED_STEP);
    }
}

pub fn clamp_speed(speed: f32) -> f32 {
    if !speed.is_finite() {
        return MIN_SPEED;
    }
    let snapped = (speed / SPEED_STEP).round() * SPEED_STEP;
    snapped.clamp(MIN_SPEED, MAX_SPEED)
}

/// Run condition for the tick system.
pub fn animation_running(control: Res<AnimationControl>) -> bool {
    control.animating
}
