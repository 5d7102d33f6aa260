//! UI module for egui-based user interface.

pub mod format;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use theme::Theme;

use crate::sensors::types::Capability;

/// Anything that can show the latest text for a capability.
///
/// The polling loop writes through this trait so it does not depend on egui.
pub trait DisplaySurface {
    /// Replace the text shown for `capability`.
    fn set_text(&mut self, capability: Capability, text: String);
}
