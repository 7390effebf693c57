use std::path::{Path, PathBuf};

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::window::FileDragAndDrop;
use thiserror::Error;

use crate::placement::{Placement, PlacementPolicy};
use crate::random::DriftRng;
use crate::settings::DriftSettings;
use crate::store::{ParticleId, ParticleStore};
use crate::viewport::ViewportSize;

/// File extensions accepted as droppable images.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "webp", "tga", "tif", "tiff", "ico",
];

/// Reasons a dropped file never becomes a particle.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DropError {
    #[error("'{0}' is not an image file")]
    Unsupported(PathBuf),
    #[error("Could not decode '{path}': {reason}")]
    LoadFailed { path: PathBuf, reason: String },
    #[error("'{0}' decoded to an empty image")]
    EmptyImage(PathBuf),
}

/// A dropped image whose decoding is still in flight.
#[derive(Debug, Clone)]
pub struct PendingDrop {
    pub path: PathBuf,
    pub handle: Handle<Image>,
}

#[derive(Resource, Debug, Default)]
pub struct PendingDrops(pub Vec<PendingDrop>);

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Runs a decoded bitmap through the placement policy and inserts it on
/// acceptance. A rejected drop is discarded without feedback.
pub fn admit_drop(
    store: &mut ParticleStore,
    policy: &PlacementPolicy,
    viewport: ViewportSize,
    size: Vec2,
    bitmap: Handle<Image>,
    draw: impl FnMut() -> f32,
) -> Option<ParticleId> {
    let snapshot = store.snapshot();
    match policy.place(viewport, size, &snapshot, draw) {
        Placement::Accepted { position, attempts } => {
            let id = store.insert(bitmap, position, size);
            info!("particle {id} spawned at {position} after {attempts} draw(s)");
            Some(id)
        }
        Placement::Rejected { attempts } => {
            debug!("drop discarded: overlapping after {attempts} draw(s)");
            None
        }
    }
}

pub fn queue_dropped_files(
    mut drops: MessageReader<FileDragAndDrop>,
    asset_server: Res<AssetServer>,
    mut pending: ResMut<PendingDrops>,
) {
    for event in drops.read() {
        let FileDragAndDrop::DroppedFile { path_buf, .. } = event else {
            continue;
        };

        if !is_image_path(path_buf) {
            warn!("{}", DropError::Unsupported(path_buf.clone()));
            continue;
        }

        let handle: Handle<Image> = asset_server.load(path_buf.clone());
        pending.0.push(PendingDrop {
            path: path_buf.clone(),
            handle,
        });
    }
}

pub fn admit_decoded_images(
    settings: Res<DriftSettings>,
    viewport: Res<ViewportSize>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut pending: ResMut<PendingDrops>,
    mut store: ResMut<ParticleStore>,
    mut rng: ResMut<DriftRng>,
) {
    if pending.0.is_empty() {
        return;
    }

    let policy = PlacementPolicy {
        overlap_distance: settings.overlap_distance,
        attempts: settings.spawn_attempts,
    };

    let mut still_pending = Vec::new();
    for dropped in pending.0.drain(..) {
        if let Some(image) = images.get(&dropped.handle) {
            if image.width() == 0 || image.height() == 0 {
                warn!("{}", DropError::EmptyImage(dropped.path));
                continue;
            }
            admit_drop(
                &mut store,
                &policy,
                *viewport,
                settings.particle_size,
                dropped.handle,
                || rng.unit(),
            );
            continue;
        }

        if let LoadState::Failed(err) = asset_server.load_state(&dropped.handle) {
            warn!(
                "{}",
                DropError::LoadFailed {
                    path: dropped.path,
                    reason: err.to_string(),
                }
            );
            continue;
        }

        still_pending.push(dropped);
    }
    pending.0 = still_pending;
}
