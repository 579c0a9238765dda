//! Interaction source events and subscription

use crate::core::{CoordinateSystem, SourceId, Vec3};
use crate::spatial::SpatialResult;

/// Snapshot of a tracked interaction source at event time
///
/// Instances are ephemeral: they are only valid for the duration of the
/// update callback and must not be retained.
pub trait SourceState {
    /// Identifier of the source that produced this event
    fn source_id(&self) -> SourceId;

    /// Resolve the source's location against the given coordinate system
    ///
    /// Returns `None` when the source is not currently localizable, for
    /// example when a hand has left the tracking volume.
    fn try_get_location(&self, coordinate_system: CoordinateSystem) -> Option<Vec3>;
}

/// Handler invoked for every interaction-source update event
pub type SourceUpdateHandler = Box<dyn Fn(&dyn SourceState) + Send + Sync>;

/// Subscription registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u32);

impl SubscriptionHandle {
    pub(crate) fn new(id: u32) -> Self {
        SubscriptionHandle(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Stream of interaction-source update events owned by the host input
/// subsystem
///
/// Handlers run synchronously on whatever thread the host delivers events
/// on; they must be non-blocking and must not panic. Teardown of the stream
/// itself is the host's responsibility.
pub trait SourceEventStream {
    /// Register a handler for source update events
    fn subscribe(&mut self, handler: SourceUpdateHandler) -> SubscriptionHandle;

    /// Remove a previously registered handler
    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> SpatialResult<()>;
}
