//! Sensor module for device motion capabilities.

pub mod iio;
pub mod reader;
pub mod simulated;
pub mod types;

pub use iio::IioSensorReader;
pub use reader::{create_reader, SensorReader, UnsupportedSensorReader};
pub use simulated::SimulatedSensorReader;
pub use types::{Capability, ReadResult, Reading, SensorError};
