//! Gaze Anchor Estimator
//!
//! A reactive position estimator for holographic rendering: on every
//! interaction-source update event it recomputes a world-space anchor a
//! fixed distance in front of the user's predicted gaze and publishes it
//! for the renderer to poll once per frame.

pub mod core;
pub mod spatial;
pub mod validation;
pub mod estimator;
pub mod utils;

// Re-export commonly used types
pub use core::{
    initial_anchor_position, CoordinateSystem, FramePrediction, HeadPose, PredictedTimestamp,
    SourceId, Vec3, DEFAULT_GAZE_DISTANCE_M, INITIAL_ANCHOR_POSITION,
};
pub use estimator::{AnchorSlot, Diagnostics, DiagnosticsSnapshot, GazeAnchorEstimator};
pub use spatial::{
    HolographicSession, MockHolographicSession, MockReferenceFrame, MockSourceState,
    MockSourceStream, ReferenceFrame, SourceEventStream, SourceState, SourceUpdateHandler,
    SpatialError, SpatialResult, SubscriptionHandle,
};
pub use utils::config::{ConfigError, EstimatorConfig};
pub use validation::PoseValidator;
