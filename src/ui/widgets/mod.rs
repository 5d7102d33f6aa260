//! UI widgets for reusable components.

pub mod reading_panel;

pub use reading_panel::ReadingPanel;
