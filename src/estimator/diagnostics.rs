//! Update diagnostics counters
//!
//! Soft failures skip an update silently from the renderer's point of view;
//! these counters are the only place a stretch of dropped updates becomes
//! visible, for example when a source keeps leaving the tracking volume.

use crate::spatial::SpatialError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking applied and skipped updates
#[derive(Debug, Default)]
pub struct Diagnostics {
    updates_applied: AtomicU64,
    skipped_unresolvable_location: AtomicU64,
    skipped_prediction_unavailable: AtomicU64,
    skipped_pose_unavailable: AtomicU64,
    skipped_invalid_pose: AtomicU64,
    skipped_coordinate_system_not_ready: AtomicU64,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_applied(&self) {
        self.updates_applied.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn record_skip(&self, error: &SpatialError) {
        let counter = match error {
            SpatialError::LocationUnresolvable { .. } => &self.skipped_unresolvable_location,
            SpatialError::PredictionUnavailable => &self.skipped_prediction_unavailable,
            SpatialError::PoseUnavailable { .. } => &self.skipped_pose_unavailable,
            SpatialError::InvalidPose { .. } => &self.skipped_invalid_pose,
            SpatialError::CoordinateSystemNotReady => &self.skipped_coordinate_system_not_ready,
            // Subscription misuse never reaches the update path
            SpatialError::InvalidSubscription { .. } => return,
        };
        counter.fetch_add(1, Ordering::AcqRel);
    }

    /// Consistent point-in-time copy of all counters
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            updates_applied: self.updates_applied.load(Ordering::Acquire),
            skipped_unresolvable_location: self
                .skipped_unresolvable_location
                .load(Ordering::Acquire),
            skipped_prediction_unavailable: self
                .skipped_prediction_unavailable
                .load(Ordering::Acquire),
            skipped_pose_unavailable: self.skipped_pose_unavailable.load(Ordering::Acquire),
            skipped_invalid_pose: self.skipped_invalid_pose.load(Ordering::Acquire),
            skipped_coordinate_system_not_ready: self
                .skipped_coordinate_system_not_ready
                .load(Ordering::Acquire),
        }
    }
}

/// Plain copy of the diagnostics counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagnosticsSnapshot {
    /// Updates that produced and published a new anchor position
    pub updates_applied: u64,
    /// Updates skipped because the source could not be localized
    pub skipped_unresolvable_location: u64,
    /// Updates skipped because no frame prediction was available
    pub skipped_prediction_unavailable: u64,
    /// Updates skipped because no head pose was available
    pub skipped_pose_unavailable: u64,
    /// Updates skipped because the predicted pose failed validation
    pub skipped_invalid_pose: u64,
    /// Updates skipped because the reference frame had no stable origin
    pub skipped_coordinate_system_not_ready: u64,
}

impl DiagnosticsSnapshot {
    /// Total updates skipped for any reason
    pub fn total_skipped(&self) -> u64 {
        self.skipped_unresolvable_location
            + self.skipped_prediction_unavailable
            + self.skipped_pose_unavailable
            + self.skipped_invalid_pose
            + self.skipped_coordinate_system_not_ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reasons_are_distinguished() {
        let diagnostics = Diagnostics::new();
        diagnostics.record_skip(&SpatialError::LocationUnresolvable { source_id: 1 });
        diagnostics.record_skip(&SpatialError::PredictionUnavailable);
        diagnostics.record_skip(&SpatialError::PoseUnavailable { timestamp_us: 0 });
        diagnostics.record_skip(&SpatialError::PoseUnavailable { timestamp_us: 1 });

        let snapshot = diagnostics.snapshot();
        assert_eq!(snapshot.skipped_unresolvable_location, 1);
        assert_eq!(snapshot.skipped_prediction_unavailable, 1);
        assert_eq!(snapshot.skipped_pose_unavailable, 2);
        assert_eq!(snapshot.skipped_invalid_pose, 0);
        assert_eq!(snapshot.total_skipped(), 4);
        assert_eq!(snapshot.updates_applied, 0);
    }

    #[test]
    fn test_applied_counter() {
        let diagnostics = Diagnostics::new();
        diagnostics.record_applied();
        diagnostics.record_applied();
        assert_eq!(diagnostics.snapshot().updates_applied, 2);
    }
}
