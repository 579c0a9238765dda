//! Mock spatial system for testing and development

use crate::core::{CoordinateSystem, FramePrediction, HeadPose, PredictedTimestamp, SourceId, Vec3};
use crate::spatial::{
    HolographicSession, ReferenceFrame, SourceEventStream, SourceState, SourceUpdateHandler,
    SpatialError, SpatialResult, SubscriptionHandle,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

/// Mock reference frame whose coordinate system identity can be swapped to
/// simulate the host re-establishing its spatial origin
pub struct MockReferenceFrame {
    coordinate_system_id: AtomicU64,
    ready: AtomicBool,
}

impl MockReferenceFrame {
    pub fn new(coordinate_system: CoordinateSystem) -> Self {
        Self {
            coordinate_system_id: AtomicU64::new(coordinate_system.id()),
            ready: AtomicBool::new(true),
        }
    }

    /// Simulate the frame being re-established with a new coordinate system
    pub fn set_coordinate_system(&self, coordinate_system: CoordinateSystem) {
        self.coordinate_system_id
            .store(coordinate_system.id(), Ordering::Release);
    }

    /// Simulate the frame not having established a stable origin yet
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Release);
    }
}

impl ReferenceFrame for MockReferenceFrame {
    fn coordinate_system(&self) -> SpatialResult<CoordinateSystem> {
        if !self.ready.load(Ordering::Acquire) {
            return Err(SpatialError::CoordinateSystemNotReady);
        }
        Ok(CoordinateSystem::new(
            self.coordinate_system_id.load(Ordering::Acquire),
        ))
    }
}

/// Mock holographic session with a scripted head pose and explicit frame
/// advancement
pub struct MockHolographicSession {
    prediction_timestamp_us: AtomicU64,
    frame_interval_us: u64,
    head_pose: Mutex<Option<HeadPose>>,
    fail_predictions: AtomicBool,
    prediction_queries: AtomicU64,
}

impl MockHolographicSession {
    /// Create a session predicting at a 60Hz frame cadence
    pub fn new() -> Self {
        Self::with_frame_interval(16_667)
    }

    /// Create a session with an explicit frame interval (microseconds)
    pub fn with_frame_interval(frame_interval_us: u64) -> Self {
        Self {
            prediction_timestamp_us: AtomicU64::new(frame_interval_us),
            frame_interval_us,
            head_pose: Mutex::new(None),
            fail_predictions: AtomicBool::new(false),
            prediction_queries: AtomicU64::new(0),
        }
    }

    /// Script the head pose returned for subsequent pose queries
    pub fn set_head_pose(&self, pose: HeadPose) {
        *self.head_pose.lock().unwrap() = Some(pose);
    }

    /// Script a convenient pose from position and forward components
    pub fn set_head_pose_parts(&self, position: Vec3, forward: Vec3) {
        self.set_head_pose(HeadPose::new(position, forward));
    }

    /// Remove the scripted pose so pose queries return `None`
    pub fn clear_head_pose(&self) {
        *self.head_pose.lock().unwrap() = None;
    }

    /// Advance the frame sequence by one display interval, as the render
    /// loop would between submissions
    pub fn advance_frame(&self) {
        self.prediction_timestamp_us
            .fetch_add(self.frame_interval_us, Ordering::AcqRel);
    }

    /// Make prediction queries fail, simulating a session that has not yet
    /// produced a frame
    pub fn fail_predictions(&self, fail: bool) {
        self.fail_predictions.store(fail, Ordering::Release);
    }

    /// Number of prediction queries observed
    pub fn prediction_query_count(&self) -> u64 {
        self.prediction_queries.load(Ordering::Acquire)
    }
}

impl Default for MockHolographicSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HolographicSession for MockHolographicSession {
    fn current_prediction(&self) -> SpatialResult<FramePrediction> {
        self.prediction_queries.fetch_add(1, Ordering::AcqRel);

        if self.fail_predictions.load(Ordering::Acquire) {
            return Err(SpatialError::PredictionUnavailable);
        }

        let timestamp = self.prediction_timestamp_us.load(Ordering::Acquire);
        Ok(FramePrediction::new(PredictedTimestamp::from_micros(
            timestamp,
        )))
    }

    fn predict_head_pose(
        &self,
        _coordinate_system: CoordinateSystem,
        _timestamp: PredictedTimestamp,
    ) -> Option<HeadPose> {
        *self.head_pose.lock().unwrap()
    }
}

/// Mock interaction-source snapshot
pub struct MockSourceState {
    id: SourceId,
    location: Option<Vec3>,
    localizable_in: Option<CoordinateSystem>,
}

impl MockSourceState {
    /// Create a source snapshot that cannot be localized
    pub fn new(id: SourceId) -> Self {
        Self {
            id,
            location: None,
            localizable_in: None,
        }
    }

    /// Give the source a resolvable location
    pub fn with_location(mut self, location: Vec3) -> Self {
        self.location = Some(location);
        self
    }

    /// Restrict localization to a single coordinate system; queries against
    /// any other system return no location
    pub fn localizable_only_in(mut self, coordinate_system: CoordinateSystem) -> Self {
        self.localizable_in = Some(coordinate_system);
        self
    }
}

impl SourceState for MockSourceState {
    fn source_id(&self) -> SourceId {
        self.id
    }

    fn try_get_location(&self, coordinate_system: CoordinateSystem) -> Option<Vec3> {
        if let Some(required) = self.localizable_in {
            if required != coordinate_system {
                return None;
            }
        }
        self.location
    }
}

/// Mock event stream that dispatches scripted source updates to subscribers
pub struct MockSourceStream {
    handlers: HashMap<SubscriptionHandle, SourceUpdateHandler>,
    handle_counter: u32,
}

impl MockSourceStream {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            handle_counter: 0,
        }
    }

    /// Deliver a source update event to every subscriber
    pub fn emit(&self, state: &dyn SourceState) {
        for handler in self.handlers.values() {
            handler(state);
        }
    }

    /// Number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for MockSourceStream {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceEventStream for MockSourceStream {
    fn subscribe(&mut self, handler: SourceUpdateHandler) -> SubscriptionHandle {
        self.handle_counter += 1;
        let handle = SubscriptionHandle::new(self.handle_counter);
        self.handlers.insert(handle, handler);
        handle
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> SpatialResult<()> {
        if self.handlers.remove(&handle).is_some() {
            Ok(())
        } else {
            Err(SpatialError::InvalidSubscription {
                handle_id: handle.id(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_reference_frame_reestablishment() {
        let frame = MockReferenceFrame::new(CoordinateSystem::new(1));
        assert_eq!(frame.coordinate_system(), Ok(CoordinateSystem::new(1)));

        frame.set_coordinate_system(CoordinateSystem::new(2));
        assert_eq!(frame.coordinate_system(), Ok(CoordinateSystem::new(2)));
    }

    #[test]
    fn test_reference_frame_not_ready() {
        let frame = MockReferenceFrame::new(CoordinateSystem::new(1));
        frame.set_ready(false);
        assert_eq!(
            frame.coordinate_system(),
            Err(SpatialError::CoordinateSystemNotReady)
        );

        frame.set_ready(true);
        assert!(frame.coordinate_system().is_ok());
    }

    #[test]
    fn test_session_frame_advancement() {
        let session = MockHolographicSession::with_frame_interval(10_000);

        let first = session.current_prediction().unwrap();
        let again = session.current_prediction().unwrap();
        assert_eq!(first, again);

        session.advance_frame();
        let next = session.current_prediction().unwrap();
        assert_eq!(
            next.timestamp.as_micros(),
            first.timestamp.as_micros() + 10_000
        );
        assert_eq!(session.prediction_query_count(), 3);
    }

    #[test]
    fn test_session_prediction_failure_injection() {
        let session = MockHolographicSession::new();
        session.fail_predictions(true);
        assert_eq!(
            session.current_prediction(),
            Err(SpatialError::PredictionUnavailable)
        );

        session.fail_predictions(false);
        assert!(session.current_prediction().is_ok());
    }

    #[test]
    fn test_session_pose_scripting() {
        let session = MockHolographicSession::new();
        let cs = CoordinateSystem::new(1);
        let ts = PredictedTimestamp::from_micros(0);

        assert!(session.predict_head_pose(cs, ts).is_none());

        let pose = HeadPose::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 0.0, -1.0));
        session.set_head_pose(pose);
        assert_eq!(session.predict_head_pose(cs, ts), Some(pose));

        session.clear_head_pose();
        assert!(session.predict_head_pose(cs, ts).is_none());
    }

    #[test]
    fn test_source_localization_restriction() {
        let cs_a = CoordinateSystem::new(1);
        let cs_b = CoordinateSystem::new(2);
        let source = MockSourceState::new(SourceId::new(7))
            .with_location(Vec3::new(0.1, 0.2, 0.3))
            .localizable_only_in(cs_a);

        assert_eq!(source.try_get_location(cs_a), Some(Vec3::new(0.1, 0.2, 0.3)));
        assert_eq!(source.try_get_location(cs_b), None);
    }

    #[test]
    fn test_unlocalizable_source() {
        let source = MockSourceState::new(SourceId::new(3));
        assert!(source.try_get_location(CoordinateSystem::new(1)).is_none());
    }

    #[test]
    fn test_stream_dispatch_and_unsubscribe() {
        let mut stream = MockSourceStream::new();
        let delivered = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&delivered);
        let handle = stream.subscribe(Box::new(move |_state: &dyn SourceState| {
            counter.fetch_add(1, Ordering::AcqRel);
        }));
        assert_eq!(stream.subscriber_count(), 1);

        let source = MockSourceState::new(SourceId::new(1));
        stream.emit(&source);
        stream.emit(&source);
        assert_eq!(delivered.load(Ordering::Acquire), 2);

        stream.unsubscribe(handle).unwrap();
        stream.emit(&source);
        assert_eq!(delivered.load(Ordering::Acquire), 2);

        assert_eq!(
            stream.unsubscribe(handle),
            Err(SpatialError::InvalidSubscription { handle_id: 1 })
        );
    }
}
