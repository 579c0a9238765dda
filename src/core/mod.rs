//! Core types and constants for the gaze anchoring system

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
