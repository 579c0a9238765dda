//! Reactive gaze anchor estimator

use crate::core::Vec3;
use crate::estimator::{AnchorSlot, Diagnostics, DiagnosticsSnapshot};
use crate::spatial::{
    HolographicSession, ReferenceFrame, SourceEventStream, SourceState, SpatialError,
    SpatialResult, SubscriptionHandle,
};
use crate::utils::config::{ConfigError, EstimatorConfig};
use crate::validation::PoseValidator;
use std::sync::Arc;

/// Estimates a world-space anchor position a fixed distance in front of the
/// user's predicted gaze
///
/// The estimator recomputes the anchor on every interaction-source update
/// event and publishes it through a shared [`AnchorSlot`] the renderer polls
/// once per frame. All per-update failures are soft: the update is skipped,
/// the previous estimate is retained, and a diagnostic counter records the
/// reason.
pub struct GazeAnchorEstimator {
    reference_frame: Arc<dyn ReferenceFrame>,
    session: Arc<dyn HolographicSession>,
    config: EstimatorConfig,
    validator: PoseValidator,
    anchor: Arc<AnchorSlot>,
    diagnostics: Arc<Diagnostics>,
}

impl GazeAnchorEstimator {
    /// Create an estimator with the default configuration
    pub fn new(
        reference_frame: Arc<dyn ReferenceFrame>,
        session: Arc<dyn HolographicSession>,
    ) -> Self {
        // Default config always validates
        Self::with_config(reference_frame, session, EstimatorConfig::default())
            .expect("default configuration is valid")
    }

    /// Create an estimator with an explicit configuration
    pub fn with_config(
        reference_frame: Arc<dyn ReferenceFrame>,
        session: Arc<dyn HolographicSession>,
        config: EstimatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let validator = PoseValidator::new(config.forward_norm_tolerance);
        Ok(Self {
            reference_frame,
            session,
            config,
            validator,
            anchor: Arc::new(AnchorSlot::default()),
            diagnostics: Arc::new(Diagnostics::new()),
        })
    }

    /// Register this estimator's update handler with an event stream
    ///
    /// Attaching the same estimator to a stream more than once
    /// double-subscribes it and every event will be processed twice; callers
    /// must attach at most once per stream.
    pub fn attach(self: &Arc<Self>, stream: &mut dyn SourceEventStream) -> SubscriptionHandle {
        let estimator = Arc::clone(self);
        stream.subscribe(Box::new(move |state: &dyn SourceState| {
            // Soft failures are already counted; nothing may escape into
            // host-owned dispatch code.
            let _ = estimator.handle_source_update(state);
        }))
    }

    /// Process one interaction-source update event
    ///
    /// Runs synchronously on the delivering thread and never blocks. On
    /// success the shared anchor position is overwritten; on failure it is
    /// left untouched and the error is returned for callers that want the
    /// skip reason.
    pub fn handle_source_update(&self, state: &dyn SourceState) -> SpatialResult<()> {
        match self.estimate(state) {
            Ok(anchor) => {
                self.anchor.store(anchor);
                self.diagnostics.record_applied();
                Ok(())
            }
            Err(error) => {
                self.diagnostics.record_skip(&error);
                Err(error)
            }
        }
    }

    fn estimate(&self, state: &dyn SourceState) -> SpatialResult<Vec3> {
        // The coordinate system may change identity when the host
        // re-establishes the frame, so it is re-read on every event.
        let coordinate_system = self.reference_frame.coordinate_system()?;

        // The resolved source location gates the update but does not feed
        // the position formula: the anchor tracks the head, and a source
        // event merely proves a localizable interaction happened.
        let _source_location = state.try_get_location(coordinate_system).ok_or(
            SpatialError::LocationUnresolvable {
                source_id: state.source_id().value(),
            },
        )?;

        // Queried exactly once per update; the session owns frame sequencing.
        let prediction = self.session.current_prediction()?;

        let pose = self
            .session
            .predict_head_pose(coordinate_system, prediction.timestamp)
            .ok_or(SpatialError::PoseUnavailable {
                timestamp_us: prediction.timestamp.as_micros(),
            })?;

        if self.config.validate_poses {
            self.validator.check(&pose)?;
        }

        Ok(pose.point_along_gaze(self.config.gaze_distance_m))
    }

    /// Latest anchor position estimate
    ///
    /// Returns the sentinel position until the first update event has been
    /// processed.
    pub fn current_anchor_position(&self) -> Vec3 {
        self.anchor.load()
    }

    /// Shared handle to the anchor slot, for renderers that poll directly
    pub fn anchor_slot(&self) -> Arc<AnchorSlot> {
        Arc::clone(&self.anchor)
    }

    /// Point-in-time copy of the update counters
    pub fn diagnostics(&self) -> DiagnosticsSnapshot {
        self.diagnostics.snapshot()
    }

    /// Current configuration
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }
}
