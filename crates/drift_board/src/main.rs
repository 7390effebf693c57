use bevy::asset::UnapprovedPathMode;
use bevy::color::palettes::tailwind::ZINC_950;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use bevy_drift::prelude::*;
use drift_board::controls;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Drift".into(),
                        resolution: WindowResolution::new(1366, 768),
                        ..default()
                    }),
                    ..default()
                })
                // dropped files live anywhere on disk
                .set(AssetPlugin {
                    unapproved_path_mode: UnapprovedPathMode::Allow,
                    ..default()
                }),
        )
        .insert_resource(ClearColor(ZINC_950.into()))
        .add_plugins(DriftPlugin::default())
        .add_plugins(controls::plugin)
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("BoardCamera"), Camera2d));
}
