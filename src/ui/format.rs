//! Text formatting for live sensor readings.

use crate::sensors::types::{Capability, ReadResult};

/// Shown in place of a missing component.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format one component to two decimals, or `N/A` when absent.
pub fn format_component(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:.2}", v))
}

/// Display text for one capability's latest read.
pub fn reading_text(capability: Capability, result: &ReadResult) -> String {
    match result {
        Ok(reading) => format!(
            "{} Data:\nX: {}\nY: {}\nZ: {}",
            capability,
            format_component(reading.x),
            format_component(reading.y),
            format_component(reading.z)
        ),
        Err(err) => err.to_string(),
    }
}

/// Display text before the first poll.
pub fn initial_text(capability: Capability) -> String {
    format!("{} Data:\nX: 0\nY: 0\nZ: 0", capability)
}
