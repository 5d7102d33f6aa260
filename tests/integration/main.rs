//! Integration tests for SensorLog.

mod recording_flow_test;
mod sensor_mock;
