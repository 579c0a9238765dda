//! Spatial collaborator abstractions
//!
//! This module defines the traits the host platform implements for the
//! estimator: the stable reference frame, the holographic session with its
//! frame prediction and head-pose queries, and the interaction-source event
//! stream. A mock implementation is provided for testing and development.

pub mod frame;
pub mod session;
pub mod source;
pub mod mock;
pub mod error;

pub use frame::ReferenceFrame;
pub use session::HolographicSession;
pub use source::{SourceEventStream, SourceState, SourceUpdateHandler, SubscriptionHandle};
pub use mock::{MockHolographicSession, MockReferenceFrame, MockSourceState, MockSourceStream};
pub use error::{SpatialError, SpatialResult};
