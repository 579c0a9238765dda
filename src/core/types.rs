//! Core data types for the gaze anchoring system

use crate::core::constants::INITIAL_ANCHOR_POSITION;

/// 3D vector in meters, expressed in a reference coordinate system
pub type Vec3 = nalgebra::Vector3<f32>;

/// Identity handle for a spatial coordinate system
///
/// The identity may change over the application lifetime when the frame of
/// reference is re-established, so consumers must re-read it rather than
/// cache it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateSystem(u64);

impl CoordinateSystem {
    pub fn new(id: u64) -> Self {
        CoordinateSystem(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Identifier of a tracked interaction source (hand, controller, stylus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(u32);

impl SourceId {
    pub fn new(id: u32) -> Self {
        SourceId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Timestamp at which the next display frame is predicted to be shown
/// (microseconds since session start)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PredictedTimestamp(u64);

impl PredictedTimestamp {
    pub fn from_micros(micros: u64) -> Self {
        PredictedTimestamp(micros)
    }

    pub fn as_micros(&self) -> u64 {
        self.0
    }
}

/// Per-frame prediction of when the frame will reach the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePrediction {
    pub timestamp: PredictedTimestamp,
}

impl FramePrediction {
    pub fn new(timestamp: PredictedTimestamp) -> Self {
        Self { timestamp }
    }
}

/// Predicted head position and facing direction at a display timestamp
///
/// The forward direction is supplied pre-normalized by the pose predictor
/// contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl HeadPose {
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }

    /// Point at the given distance (meters) along the gaze direction
    pub fn point_along_gaze(&self, distance_m: f32) -> Vec3 {
        self.position + distance_m * self.forward
    }
}

/// Anchor position reported before any update event has been processed
pub fn initial_anchor_position() -> Vec3 {
    Vec3::from(INITIAL_ANCHOR_POSITION)
}
