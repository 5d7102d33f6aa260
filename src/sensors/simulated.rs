//! Simulated motion sensors for development and demos.
//!
//! Produces a device resting roughly flat while swaying slowly, and a
//! horizontal magnetic field rotating about the vertical axis.

use std::time::{Duration, Instant};

use crate::sensors::reader::SensorReader;
use crate::sensors::types::{ReadResult, Reading};

/// Standard gravity (m/s²)
const GRAVITY: f64 = 9.81;
/// Peak sway acceleration on the horizontal axes (m/s²)
const SWAY_AMPLITUDE: f64 = 0.4;
/// Sway frequency (Hz)
const SWAY_FREQUENCY: f64 = 0.5;
/// Horizontal magnetic field strength (µT)
const FIELD_HORIZONTAL: f64 = 25.0;
/// Vertical magnetic field component (µT)
const FIELD_VERTICAL: f64 = -40.0;
/// Full heading rotation period (s)
const ROTATION_PERIOD_SECS: f64 = 20.0;

/// Simulated sensor reader; values are a pure function of elapsed time.
#[derive(Debug, Clone)]
pub struct SimulatedSensorReader {
    started: Instant,
}

impl SimulatedSensorReader {
    /// Create a simulated reader starting now.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Accelerometer vector after `elapsed`.
    pub fn accelerometer_at(elapsed: Duration) -> Reading {
        let phase = std::f64::consts::TAU * SWAY_FREQUENCY * elapsed.as_secs_f64();
        Reading::new(
            SWAY_AMPLITUDE * phase.sin(),
            SWAY_AMPLITUDE * phase.cos(),
            GRAVITY,
        )
    }

    /// Compass vector after `elapsed`.
    pub fn compass_at(elapsed: Duration) -> Reading {
        let heading = std::f64::consts::TAU * elapsed.as_secs_f64() / ROTATION_PERIOD_SECS;
        Reading::new(
            FIELD_HORIZONTAL * heading.cos(),
            FIELD_HORIZONTAL * heading.sin(),
            FIELD_VERTICAL,
        )
    }
}

impl Default for SimulatedSensorReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorReader for SimulatedSensorReader {
    fn read_accelerometer(&mut self) -> ReadResult {
        Ok(Self::accelerometer_at(self.started.elapsed()))
    }

    fn read_compass(&mut self) -> ReadResult {
        Ok(Self::compass_at(self.started.elapsed()))
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
