//! Reference frame abstraction

use crate::core::CoordinateSystem;
use crate::spatial::SpatialResult;

/// A stable spatial frame of reference owned by the host platform
///
/// The coordinate system handle may change identity over the application
/// lifetime if the host re-establishes the frame, so callers must query it
/// on every use instead of caching it.
pub trait ReferenceFrame: Send + Sync {
    /// Get the frame's current coordinate system
    ///
    /// Fails with [`SpatialError::CoordinateSystemNotReady`] while the host
    /// has not yet established a stable origin, for example during the first
    /// seconds after startup or after tracking loss.
    ///
    /// [`SpatialError::CoordinateSystemNotReady`]: crate::spatial::SpatialError::CoordinateSystemNotReady
    fn coordinate_system(&self) -> SpatialResult<CoordinateSystem>;
}
