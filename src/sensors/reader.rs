//! Sensor reader abstraction over platform motion capabilities.

use crate::sensors::simulated::SimulatedSensorReader;
use crate::sensors::types::{Capability, ReadResult, SensorError};
use crate::storage::config::{SensorBackend, SensorSettings};

/// Trait for platform motion sensor access.
///
/// Every call queries the platform once and reflects its state at call time.
/// Implementations never retry and never cache values between calls.
pub trait SensorReader {
    /// Read the current accelerometer vector.
    fn read_accelerometer(&mut self) -> ReadResult;

    /// Read the current compass vector.
    fn read_compass(&mut self) -> ReadResult;

    /// Short human-readable backend name.
    fn name(&self) -> &str;

    /// Read one capability by kind.
    fn read(&mut self, capability: Capability) -> ReadResult {
        match capability {
            Capability::Accelerometer => self.read_accelerometer(),
            Capability::Compass => self.read_compass(),
        }
    }
}

/// Reader for platforms without any supported sensor binding.
#[derive(Debug, Default)]
pub struct UnsupportedSensorReader;

impl SensorReader for UnsupportedSensorReader {
    fn read_accelerometer(&mut self) -> ReadResult {
        Err(SensorError::Unavailable(Capability::Accelerometer))
    }

    fn read_compass(&mut self) -> ReadResult {
        Err(SensorError::Unavailable(Capability::Compass))
    }

    fn name(&self) -> &str {
        "unsupported"
    }
}

/// Build the sensor reader selected by the settings.
pub fn create_reader(settings: &SensorSettings) -> Box<dyn SensorReader> {
    match settings.backend {
        SensorBackend::Simulated => {
            tracing::info!("Using simulated motion sensors");
            Box::new(SimulatedSensorReader::new())
        }
        SensorBackend::Platform => platform_reader(settings),
    }
}

#[cfg(target_os = "linux")]
fn platform_reader(settings: &SensorSettings) -> Box<dyn SensorReader> {
    let reader = crate::sensors::iio::IioSensorReader::discover(&settings.iio_root);
    tracing::info!(
        "Using IIO sensors under {} (accelerometer: {}, compass: {})",
        settings.iio_root.display(),
        reader.has(Capability::Accelerometer),
        reader.has(Capability::Compass)
    );
    Box::new(reader)
}

#[cfg(not(target_os = "linux"))]
fn platform_reader(_settings: &SensorSettings) -> Box<dyn SensorReader> {
    tracing::info!("No motion sensor binding for this platform");
    Box::new(UnsupportedSensorReader)
}
