//! UI screens for the application.

pub mod sensor_display;

pub use sensor_display::{SensorDisplayScreen, StatusMessage};

/// Action requested by a screen, applied by the app after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Start recording
    Start,
    /// Stop recording and export (or retry a failed export)
    Stop,
    /// Drop unsaved samples
    Discard,
}
