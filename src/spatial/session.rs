//! Holographic session abstraction

use crate::core::{CoordinateSystem, FramePrediction, HeadPose, PredictedTimestamp};
use crate::spatial::SpatialResult;

/// Host holographic session providing frame predictions and head poses
///
/// Frame-sequence advancement is a single-owner resource belonging to the
/// render loop. Consumers of this trait read the prediction for the frame
/// the session is currently preparing; they never advance the sequence
/// themselves, which keeps the estimator from skipping or duplicating
/// frames behind the renderer's back.
pub trait HolographicSession: Send + Sync {
    /// Prediction for the frame currently being prepared
    ///
    /// Must be queried at most once per update cycle.
    fn current_prediction(&self) -> SpatialResult<FramePrediction>;

    /// Predicted head pose at the given display timestamp, relative to the
    /// given coordinate system
    ///
    /// Returns `None` when the predictor has no pose for that timestamp,
    /// for example before tracking has locked on.
    fn predict_head_pose(
        &self,
        coordinate_system: CoordinateSystem,
        timestamp: PredictedTimestamp,
    ) -> Option<HeadPose>;
}
