//! **Drift** turns dropped images into floating particles for the
//! [Bevy game engine](https://bevyengine.org/).
//!
//! Particles spawn on the bottom edge of the window, drift upward at a constant
//! speed and wrap back to the bottom once they leave the top. They can be
//! dragged to a new position and removed with a double-click.
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_drift::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins((DefaultPlugins, DriftPlugin::default()))
//!         .run();
//! }
//! ```
//!
//! The engine core ([`store`], [`placement`], [`motion`]) is plain Rust and
//! can be driven without an app; the remaining modules adapt it to Bevy.

/// Play/pause toggle and speed input.
pub mod controls;
/// File drop ingestion.
pub mod ingest;
/// Drag and double-click gestures on particle sprites.
pub mod interaction;
/// Per-tick drift and wrap-around.
pub mod motion;
/// Spawn position and overlap rejection.
pub mod placement;
/// Convenience re-exports.
pub mod prelude;
pub mod random;
/// Sprite mirroring of the particle store.
pub mod render;
/// RON-backed configuration.
pub mod settings;
/// The authoritative particle collection.
pub mod store;
pub mod viewport;

use bevy::prelude::*;
use bevy::window::FileDragAndDrop;

use controls::animation_running;
use ingest::{PendingDrops, admit_decoded_images, queue_dropped_files};
use interaction::{
    ClickTracker, on_particle_click, on_particle_drag, on_particle_drag_end,
    on_particle_drag_start,
};
use motion::advance_particles;
use random::DriftRng;
use render::sync_particle_sprites;
use settings::{load_settings_or_default, settings_path};
use viewport::track_primary_window;

/// Plugin that adds drifting image particles to a Bevy app.
///
/// Without explicit settings, `drift.ron` is read from the working directory.
#[derive(Default)]
pub struct DriftPlugin {
    pub settings: Option<DriftSettings>,
}

impl DriftPlugin {
    pub fn with_settings(settings: DriftSettings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

impl Plugin for DriftPlugin {
    fn build(&self, app: &mut App) {
        let settings = match &self.settings {
            Some(settings) => settings.clone().sanitized(),
            None => load_settings_or_default(&settings_path()),
        };

        app.insert_resource(Time::<Fixed>::from_duration(settings.tick_period()))
            .insert_resource(AnimationControl::new(
                settings.start_animating,
                settings.initial_speed,
            ))
            .insert_resource(settings)
            .init_resource::<ParticleStore>()
            .init_resource::<ViewportSize>()
            .init_resource::<PendingDrops>()
            .init_resource::<ClickTracker>()
            .init_resource::<DriftRng>()
            .add_message::<FileDragAndDrop>();

        app.add_observer(on_particle_drag_start)
            .add_observer(on_particle_drag)
            .add_observer(on_particle_drag_end)
            .add_observer(on_particle_click);

        app.add_systems(FixedUpdate, advance_particles.run_if(animation_running));

        app.add_systems(
            Update,
            (
                track_primary_window,
                queue_dropped_files,
                admit_decoded_images,
                sync_particle_sprites,
            )
                .chain(),
        );
    }
}

pub use controls::AnimationControl;
pub use motion::{MotionEngine, TickReport};
pub use placement::{Placement, PlacementPolicy};
pub use settings::DriftSettings;
pub use store::{Particle, ParticleId, ParticleStore, RenderItem, Snapshot};
pub use viewport::ViewportSize;
