//! System-wide constants

/// Default distance from the user's head at which the hologram is anchored (meters)
pub const DEFAULT_GAZE_DISTANCE_M: f32 = 0.1;

/// Anchor position reported before any interaction event has been processed:
/// two meters in front of the origin along -Z
pub const INITIAL_ANCHOR_POSITION: [f32; 3] = [0.0, 0.0, -2.0];
