//! Spatial query error types and handling

use std::fmt;

/// Error types for spatial collaborator queries
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialError {
    /// The reference frame has not yet established a stable origin
    CoordinateSystemNotReady,
    /// The session cannot currently produce a frame prediction
    PredictionUnavailable,
    /// No head pose is available at the requested timestamp
    PoseUnavailable { timestamp_us: u64 },
    /// The interaction source cannot be localized against the reference frame
    LocationUnresolvable { source_id: u32 },
    /// A predicted pose failed sanity validation
    InvalidPose { details: String },
    /// Unknown or already-removed subscription handle
    InvalidSubscription { handle_id: u32 },
}

impl fmt::Display for SpatialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialError::CoordinateSystemNotReady => {
                write!(f, "Reference frame has no stable coordinate system yet")
            }
            SpatialError::PredictionUnavailable => {
                write!(f, "No frame prediction available from session")
            }
            SpatialError::PoseUnavailable { timestamp_us } => {
                write!(f, "No head pose available at timestamp {}us", timestamp_us)
            }
            SpatialError::LocationUnresolvable { source_id } => {
                write!(f, "Source {} cannot be localized", source_id)
            }
            SpatialError::InvalidPose { details } => {
                write!(f, "Invalid head pose: {}", details)
            }
            SpatialError::InvalidSubscription { handle_id } => {
                write!(f, "Invalid subscription handle {}", handle_id)
            }
        }
    }
}

impl std::error::Error for SpatialError {}

/// Result type for spatial operations
pub type SpatialResult<T> = Result<T, SpatialError>;

impl SpatialError {
    /// Whether this error should be treated as a soft failure: skip the
    /// current update, keep the previous estimate, and carry on
    ///
    /// A single bad frame of tracking must never crash the host session, so
    /// every per-update failure is soft. Only subscription misuse is a hard
    /// caller error.
    pub fn is_soft(&self) -> bool {
        !matches!(self, SpatialError::InvalidSubscription { .. })
    }
}
