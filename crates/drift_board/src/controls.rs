use bevy::color::palettes::tailwind;
use bevy::prelude::*;
use bevy_drift::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_controls).add_systems(
        Update,
        (
            handle_play_pause_click,
            handle_speed_clicks,
            handle_keyboard,
            update_labels,
        )
            .chain(),
    );
}

const BUTTON_COLOR: Srgba = tailwind::ZINC_800;
const TEXT_COLOR: Srgba = tailwind::ZINC_200;

#[derive(Component)]
pub struct BoardControls;

#[derive(Component)]
pub struct PlayPauseButton;

#[derive(Component)]
pub struct PlayPauseLabel;

#[derive(Component)]
pub struct SpeedButton(pub i32);

#[derive(Component)]
pub struct SpeedLabel;

fn spawn_controls(mut commands: Commands, control: Res<AnimationControl>) {
    commands.spawn(board_controls(&control));
}

fn board_controls(control: &AnimationControl) -> impl Bundle {
    (
        BoardControls,
        Name::new("BoardControls"),
        Node {
            position_type: PositionType::Absolute,
            top: px(12),
            left: px(12),
            align_items: AlignItems::Center,
            column_gap: px(6),
            ..default()
        },
        children![
            (
                PlayPauseButton,
                control_button(),
                children![(
                    PlayPauseLabel,
                    Text::new(play_pause_text(control)),
                    TextColor(TEXT_COLOR.into()),
                )],
            ),
            (
                Text::new("Speed"),
                TextColor(tailwind::ZINC_400.into()),
            ),
            (
                SpeedButton(-1),
                control_button(),
                children![(Text::new("-"), TextColor(TEXT_COLOR.into()))],
            ),
            (
                SpeedLabel,
                Text::new(speed_text(control)),
                TextColor(TEXT_COLOR.into()),
            ),
            (
                SpeedButton(1),
                control_button(),
                children![(Text::new("+"), TextColor(TEXT_COLOR.into()))],
            ),
        ],
    )
}

fn control_button() -> impl Bundle {
    (
        Button,
        Node {
            padding: UiRect::axes(px(10), px(4)),
            ..default()
        },
        BackgroundColor(BUTTON_COLOR.into()),
    )
}

fn play_pause_text(control: &AnimationControl) -> &'static str {
    if control.is_animating() {
        "Pause"
    } else {
        "Play"
    }
}

fn speed_text(control: &AnimationControl) -> String {
    format!("{:.1}", control.speed())
}

pub fn handle_play_pause_click(
    mut control: ResMut<AnimationControl>,
    button_query: Query<
        &Interaction,
        (Changed<Interaction>, With<Button>, With<PlayPauseButton>),
    >,
) {
    for interaction in &button_query {
        if *interaction == Interaction::Pressed {
            control.toggle();
            info!("animation {}", if control.is_animating() { "resumed" } else { "paused" });
        }
    }
}

pub fn handle_speed_clicks(
    mut control: ResMut<AnimationControl>,
    button_query: Query<(&Interaction, &SpeedButton), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, button) in &button_query {
        if *interaction == Interaction::Pressed {
            control.step_speed(button.0);
        }
    }
}

pub fn handle_keyboard(keys: Res<ButtonInput<KeyCode>>, mut control: ResMut<AnimationControl>) {
    if keys.just_pressed(KeyCode::Space) {
        control.toggle();
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        control.step_speed(1);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        control.step_speed(-1);
    }
}

fn update_labels(
    control: Res<AnimationControl>,
    mut play_pause: Query<&mut Text, (With<PlayPauseLabel>, Without<SpeedLabel>)>,
    mut speed: Query<&mut Text, (With<SpeedLabel>, Without<PlayPauseLabel>)>,
) {
    if !control.is_changed() {
        return;
    }

    for mut text in &mut play_pause {
        text.0 = play_pause_text(&control).to_string();
    }
    for mut text in &mut speed {
        text.0 = speed_text(&control);
    }
}
