//! Reading panel widget for showing one capability's text block.

use egui::{Color32, RichText, Ui, Vec2};

/// A framed, monospaced text block for a single sensor.
pub struct ReadingPanel<'a> {
    /// Text to display
    text: &'a str,
    /// Card fill color
    fill: Color32,
    /// Font size
    size: f32,
}

impl<'a> ReadingPanel<'a> {
    /// Create a new reading panel.
    pub fn new(text: &'a str, fill: Color32) -> Self {
        Self {
            text,
            fill,
            size: 18.0,
        }
    }

    /// Set the font size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Render the panel.
    pub fn show(self, ui: &mut Ui) {
        egui::Frame::new()
            .fill(self.fill)
            .corner_radius(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(260.0, 110.0));
                ui.label(RichText::new(self.text).size(self.size).monospace());
            });
    }
}
