//! Estimator configuration with validation and JSON persistence

use crate::core::DEFAULT_GAZE_DISTANCE_M;
use crate::validation::pose::DEFAULT_FORWARD_NORM_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration parameters for the gaze anchor estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Distance along the gaze direction at which the anchor is placed (meters)
    pub gaze_distance_m: f32,
    /// Whether predicted poses are sanity-checked before use
    pub validate_poses: bool,
    /// Tolerance on the forward direction's deviation from unit length
    pub forward_norm_tolerance: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            gaze_distance_m: DEFAULT_GAZE_DISTANCE_M,
            validate_poses: true,
            forward_norm_tolerance: DEFAULT_FORWARD_NORM_TOLERANCE,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl EstimatorConfig {
    /// Validate all parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gaze_distance_m.is_finite() || self.gaze_distance_m < 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "gaze_distance_m".to_string(),
                value: self.gaze_distance_m.to_string(),
                reason: "Gaze distance must be finite and non-negative".to_string(),
            });
        }

        if self.gaze_distance_m > 100.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "gaze_distance_m".to_string(),
                value: self.gaze_distance_m.to_string(),
                reason: "Gaze distance beyond 100m is outside any plausible holographic placement".to_string(),
            });
        }

        if !self.forward_norm_tolerance.is_finite() || self.forward_norm_tolerance <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "forward_norm_tolerance".to_string(),
                value: self.forward_norm_tolerance.to_string(),
                reason: "Norm tolerance must be finite and positive".to_string(),
            });
        }

        Ok(())
    }

    /// Update the gaze distance at runtime, returning the previous value
    pub fn set_gaze_distance(&mut self, distance_m: f32) -> Result<f32, ConfigError> {
        let candidate = Self {
            gaze_distance_m: distance_m,
            ..self.clone()
        };
        candidate.validate()?;

        let old_value = self.gaze_distance_m;
        self.gaze_distance_m = distance_m;
        Ok(old_value)
    }

    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config_is_valid() {
        let config = EstimatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gaze_distance_m, 0.1);
        assert!(config.validate_poses);
    }

    #[test]
    fn test_negative_gaze_distance_rejected() {
        let config = EstimatorConfig {
            gaze_distance_m: -0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_gaze_distance_rejected() {
        let config = EstimatorConfig {
            gaze_distance_m: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_runtime_gaze_distance_adjustment() {
        let mut config = EstimatorConfig::default();

        let old_value = config.set_gaze_distance(2.0).unwrap();
        assert_eq!(old_value, 0.1);
        assert_eq!(config.gaze_distance_m, 2.0);

        // Invalid update leaves the current value untouched
        assert!(config.set_gaze_distance(-1.0).is_err());
        assert_eq!(config.gaze_distance_m, 2.0);
    }

    #[test]
    fn test_config_file_round_trip() {
        let config = EstimatorConfig {
            gaze_distance_m: 0.25,
            validate_poses: false,
            forward_norm_tolerance: 1e-2,
        };

        let path = env::temp_dir().join("gaze_anchor_config_test.json");
        config.save_to_file(&path).unwrap();
        let loaded = EstimatorConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_invalid_file_contents_rejected() {
        let path = env::temp_dir().join("gaze_anchor_config_invalid.json");
        fs::write(&path, "{ not json").unwrap();

        let result = EstimatorConfig::from_file(&path);
        assert!(matches!(
            result,
            Err(ConfigError::SerializationError { .. })
        ));

        let _ = fs::remove_file(path);
    }
}
