use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::motion::DEFAULT_EXIT_MARGIN;
use crate::placement::DEFAULT_OVERLAP_DISTANCE;

pub const SETTINGS_FILE_NAME: &str = "drift.ron";

/// Errors that can occur when reading or writing [`DriftSettings`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// Tunables for the drift engine, stored as RON.
///
/// Every field is optional in the file; missing ones take their default.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftSettings {
    /// Period of one animation tick, in milliseconds.
    pub tick_period_ms: u64,
    /// Width and height every particle is drawn at.
    pub particle_size: Vec2,
    pub overlap_distance: f32,
    pub exit_margin: f32,
    /// Number of random draws a drop gets before it is discarded.
    pub spawn_attempts: u32,
    pub initial_speed: f32,
    pub start_animating: bool,
    /// Maximum gap between two clicks of a double-click, in seconds.
    pub double_click_window: f32,
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self {
            tick_period_ms: 10,
            particle_size: Vec2::new(150.0, 250.0),
            overlap_distance: DEFAULT_OVERLAP_DISTANCE,
            exit_margin: DEFAULT_EXIT_MARGIN,
            spawn_attempts: 1,
            initial_speed: 1.0,
            start_animating: true,
            double_click_window: 0.3,
        }
    }
}

impl DriftSettings {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Replaces values the engine cannot work with by their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.tick_period_ms == 0 {
            warn!("tick_period_ms must be positive, using {}", defaults.tick_period_ms);
            self.tick_period_ms = defaults.tick_period_ms;
        }
        if self.particle_size.cmple(Vec2::ZERO).any() || self.particle_size.is_nan() {
            warn!(
                "particle_size must be positive, using {}",
                defaults.particle_size
            );
            self.particle_size = defaults.particle_size;
        }
        if self.overlap_distance.is_nan() || self.overlap_distance < 0.0 {
            self.overlap_distance = defaults.overlap_distance;
        }
        if self.exit_margin.is_nan() || self.exit_margin < 0.0 {
            self.exit_margin = defaults.exit_margin;
        }
        if self.spawn_attempts == 0 {
            self.spawn_attempts = 1;
        }
        if self.double_click_window.is_nan() || self.double_click_window <= 0.0 {
            self.double_click_window = defaults.double_click_window;
        }
        self
    }
}

pub fn settings_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_default()
        .join(SETTINGS_FILE_NAME)
}

pub fn load_settings(path: &Path) -> Result<DriftSettings, SettingsError> {
    let contents = std::fs::read_to_string(path)?;
    let settings = ron::from_str::<DriftSettings>(&contents)?;
    Ok(settings.sanitized())
}

/// Loads settings from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_settings_or_default(path: &Path) -> DriftSettings {
    if !path.exists() {
        return DriftSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => {
            info!("loaded settings from {}", path.display());
            settings
        }
        Err(err) => {
            warn!("{err}; using default settings ({})", path.display());
            DriftSettings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &DriftSettings) -> Result<(), SettingsError> {
    let contents = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::default())?;
    std::fs::write(path, contents)?;
    Ok(())
}
