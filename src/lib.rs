//! SensorLog - Motion Sensor Logger
//!
//! Polls the accelerometer and compass at a fixed rate, shows the live
//! readings, and records them on demand into two CSV files.

pub mod polling;
pub mod recording;
pub mod sensors;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use polling::PollingLoop;
pub use recording::recorder::RecordingController;
pub use sensors::reader::SensorReader;
pub use storage::config::AppConfig;
