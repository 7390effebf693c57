//! On-screen board for [`bevy_drift`]: playback controls drawn over the
//! drifting images.

pub mod controls;
