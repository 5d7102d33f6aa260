//! Sensor types for device motion sensors.
//!
//! Defines the capabilities the application polls, the three-axis
//! [`Reading`] they produce, and the error raised when a capability is
//! missing on the current platform.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A motion sensing capability exposed by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Linear acceleration (m/s²)
    Accelerometer,
    /// Magnetic field / orientation
    Compass,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Accelerometer => write!(f, "Accelerometer"),
            Capability::Compass => write!(f, "Compass"),
        }
    }
}

/// Instantaneous three-axis vector from one capability.
///
/// Each component is optional: a platform may report a reading where one
/// axis could not be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// X-axis component
    pub x: Option<f64>,
    /// Y-axis component
    pub y: Option<f64>,
    /// Z-axis component
    pub z: Option<f64>,
}

impl Reading {
    /// Create a reading with all three components present.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Create a reading from possibly missing components.
    pub fn from_components(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    /// Components in x, y, z order.
    pub fn components(&self) -> [Option<f64>; 3] {
        [self.x, self.y, self.z]
    }

    /// Whether every component is present.
    pub fn is_complete(&self) -> bool {
        self.components().iter().all(Option::is_some)
    }
}

/// Errors raised by a sensor capability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SensorError {
    /// The capability is not implemented on this platform.
    #[error("{0} not implemented on this platform")]
    Unavailable(Capability),
}

impl SensorError {
    /// The capability that failed.
    pub fn capability(&self) -> Capability {
        match self {
            SensorError::Unavailable(capability) => *capability,
        }
    }
}

/// Result of a single capability query.
pub type ReadResult = Result<Reading, SensorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_complete() {
        assert!(Reading::new(1.0, 2.0, 3.0).is_complete());
        assert!(!Reading::from_components(Some(1.0), None, Some(3.0)).is_complete());
        assert!(!Reading::default().is_complete());
    }

    #[test]
    fn test_unavailable_message() {
        let err = SensorError::Unavailable(Capability::Compass);
        assert_eq!(err.to_string(), "Compass not implemented on this platform");
        assert_eq!(err.capability(), Capability::Compass);
    }
}
