//! Demonstration of the gaze anchor estimator against the mock spatial
//! system: a scripted head trajectory with a mid-sequence tracking dropout.

use gaze_anchor::{
    CoordinateSystem, EstimatorConfig, GazeAnchorEstimator, HolographicSession,
    MockHolographicSession, MockReferenceFrame, MockSourceState, MockSourceStream, ReferenceFrame,
    SourceId, Vec3,
};
use std::sync::Arc;

fn main() {
    let frame = Arc::new(MockReferenceFrame::new(CoordinateSystem::new(1)));
    let session = Arc::new(MockHolographicSession::new());

    let config = EstimatorConfig::default();
    println!(
        "gaze-anchor demo: anchoring {}m in front of the user's gaze",
        config.gaze_distance_m
    );

    let estimator = Arc::new(
        GazeAnchorEstimator::with_config(
            Arc::clone(&frame) as Arc<dyn ReferenceFrame>,
            Arc::clone(&session) as Arc<dyn HolographicSession>,
            config,
        )
        .expect("default demo configuration is valid"),
    );

    let mut stream = MockSourceStream::new();
    estimator.attach(&mut stream);

    println!(
        "before any event: anchor = {}",
        format_position(estimator.current_anchor_position())
    );

    // The user's head pans left to right while a tracked hand keeps firing
    // update events. Halfway through, the hand leaves the tracking volume
    // for two events and the anchor holds its last estimate.
    let head_height = 1.6;
    for step in 0..8 {
        let t = step as f32 / 7.0;
        let yaw = (t - 0.5) * 0.8;
        let forward = Vec3::new(yaw.sin(), 0.0, -yaw.cos());
        session.set_head_pose_parts(Vec3::new(0.0, head_height, 0.0), forward);

        let hand = if (3..5).contains(&step) {
            MockSourceState::new(SourceId::new(1))
        } else {
            MockSourceState::new(SourceId::new(1))
                .with_location(Vec3::new(0.1, 1.2, -0.4))
        };

        stream.emit(&hand);
        session.advance_frame();

        println!(
            "step {}: anchor = {}",
            step,
            format_position(estimator.current_anchor_position())
        );
    }

    let diagnostics = estimator.diagnostics();
    println!(
        "applied {} updates, skipped {} ({} unresolvable location)",
        diagnostics.updates_applied,
        diagnostics.total_skipped(),
        diagnostics.skipped_unresolvable_location
    );
}

fn format_position(position: Vec3) -> String {
    format!("({:+.4}, {:+.4}, {:+.4})", position.x, position.y, position.z)
}
