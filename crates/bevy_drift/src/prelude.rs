pub use crate::DriftPlugin;
pub use crate::controls::{AnimationControl, MAX_SPEED, MIN_SPEED, SPEED_STEP};
pub use crate::motion::{MotionEngine, TickReport};
pub use crate::placement::{Placement, PlacementPolicy};
pub use crate::random::DriftRng;
pub use crate::render::ParticleSprite;
pub use crate::settings::DriftSettings;
pub use crate::store::{Particle, ParticleId, ParticleStore, RenderItem, Snapshot};
pub use crate::viewport::ViewportSize;
