//! Per-computation trajectory parameters.

use std::path::Path;

use balltraj_core::error::{Result, SolveError, SolveResult, TrajError};
use balltraj_core::traits::Validate;
use serde::{Deserialize, Serialize};

/// Parameters of one trajectory computation.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Number of polyline points, endpoints included.
    pub sample_count: usize,
    /// Launch angle above the horizontal plane, in degrees.
    pub launch_angle_degrees: f64,
    /// Magnitude of the downward gravitational acceleration.
    pub gravity: f64,
}

impl TrajectoryConfig {
    pub const DEFAULT_SAMPLE_COUNT: usize = 100;
    pub const DEFAULT_LAUNCH_ANGLE_DEGREES: f64 = 45.0;
    pub const DEFAULT_GRAVITY: f64 = 10.0;

    pub fn new(sample_count: usize, launch_angle_degrees: f64, gravity: f64) -> Self {
        Self {
            sample_count,
            launch_angle_degrees,
            gravity,
        }
    }

    /// Tangent of the launch angle.
    pub fn slope(&self) -> f64 {
        self.launch_angle_degrees.to_radians().tan()
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TrajError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        encode_json(self, true)
    }
}

/// Encode a value as JSON, reporting failures as serialization errors.
pub(crate) fn encode_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(|e| TrajError::Serialize(e.to_string()))
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
            launch_angle_degrees: Self::DEFAULT_LAUNCH_ANGLE_DEGREES,
            gravity: Self::DEFAULT_GRAVITY,
        }
    }
}

impl Validate for TrajectoryConfig {
    fn validate(&self) -> SolveResult<()> {
        if self.sample_count < 2 {
            return Err(SolveError::Configuration(format!(
                "sample count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(SolveError::Configuration(format!(
                "gravity must be positive and finite, got {}",
                self.gravity
            )));
        }
        // At +-90 degrees the arc has no horizontal extent to fit.
        if !self.launch_angle_degrees.is_finite() || self.launch_angle_degrees.abs() >= 90.0 {
            return Err(SolveError::Configuration(format!(
                "launch angle must lie strictly between -90 and 90 degrees, got {}",
                self.launch_angle_degrees
            )));
        }
        Ok(())
    }
}
