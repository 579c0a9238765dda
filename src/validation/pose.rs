//! Head pose sanity validation
//!
//! The pose predictor contract promises finite components and a unit-length
//! forward direction, but a pose that violates it would poison the anchor
//! estimate for every frame until the next update. Validation failures are
//! soft: the update is skipped, never faulted.

use crate::core::HeadPose;
use crate::spatial::{SpatialError, SpatialResult};

/// Default tolerance on the forward direction's deviation from unit length
pub const DEFAULT_FORWARD_NORM_TOLERANCE: f32 = 1e-3;

/// Validates predicted head poses before they feed the anchor computation
#[derive(Debug, Clone)]
pub struct PoseValidator {
    forward_norm_tolerance: f32,
}

impl PoseValidator {
    pub fn new(forward_norm_tolerance: f32) -> Self {
        Self {
            forward_norm_tolerance,
        }
    }

    /// Check that a pose is finite and its forward direction is unit length
    /// within tolerance
    pub fn check(&self, pose: &HeadPose) -> SpatialResult<()> {
        if !pose.position.iter().all(|c| c.is_finite()) {
            return Err(SpatialError::InvalidPose {
                details: format!("non-finite position component in {:?}", pose.position),
            });
        }

        if !pose.forward.iter().all(|c| c.is_finite()) {
            return Err(SpatialError::InvalidPose {
                details: format!("non-finite forward component in {:?}", pose.forward),
            });
        }

        let norm = pose.forward.norm();
        if (norm - 1.0).abs() > self.forward_norm_tolerance {
            return Err(SpatialError::InvalidPose {
                details: format!("forward direction norm {} is not unit length", norm),
            });
        }

        Ok(())
    }
}

impl Default for PoseValidator {
    fn default() -> Self {
        Self::new(DEFAULT_FORWARD_NORM_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;

    fn valid_pose() -> HeadPose {
        HeadPose::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_valid_pose_passes() {
        assert!(PoseValidator::default().check(&valid_pose()).is_ok());
    }

    #[test]
    fn test_nan_position_rejected() {
        let mut pose = valid_pose();
        pose.position.y = f32::NAN;
        assert!(PoseValidator::default().check(&pose).is_err());
    }

    #[test]
    fn test_infinite_forward_rejected() {
        let mut pose = valid_pose();
        pose.forward.x = f32::INFINITY;
        assert!(PoseValidator::default().check(&pose).is_err());
    }

    #[test]
    fn test_non_unit_forward_rejected() {
        let pose = HeadPose::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -2.0));
        let result = PoseValidator::default().check(&pose);
        assert!(matches!(result, Err(SpatialError::InvalidPose { .. })));
    }

    #[test]
    fn test_tolerance_is_respected() {
        let nearly_unit = HeadPose::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.005));
        assert!(PoseValidator::default().check(&nearly_unit).is_err());
        assert!(PoseValidator::new(1e-2).check(&nearly_unit).is_ok());
    }
}
