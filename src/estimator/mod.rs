//! Gaze anchor estimation
//!
//! The estimator reacts to interaction-source update events by recomputing a
//! world-space anchor position a fixed distance along the user's predicted
//! gaze, and publishes it for the renderer to poll once per frame.

pub mod anchor;
pub mod diagnostics;
pub mod gaze;

pub use anchor::AnchorSlot;
pub use diagnostics::{Diagnostics, DiagnosticsSnapshot};
pub use gaze::GazeAnchorEstimator;
