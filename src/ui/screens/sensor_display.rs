//! Live sensor display screen.
//!
//! Shows the accelerometer and compass text blocks, the Start and Stop
//! buttons, and a status line describing the last export.

use chrono::{DateTime, Local, Utc};
use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use crate::recording::recorder::RecordingController;
use crate::recording::types::{ExportError, StopOutcome};
use crate::sensors::types::Capability;
use crate::ui::format::initial_text;
use crate::ui::theme::Theme;
use crate::ui::widgets::ReadingPanel;
use crate::ui::DisplaySurface;

use super::ScreenAction;

/// Status line shown below the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Informational
    Info(String),
    /// Export succeeded
    Success(String),
    /// Export failed
    Error(String),
}

impl StatusMessage {
    /// Describe the result of a stop.
    pub fn from_stop(result: &Result<StopOutcome, ExportError>) -> Self {
        match result {
            Ok(StopOutcome::Exported {
                started_at,
                summary,
            }) => {
                let mut text = format!(
                    "Saved {} samples to {} and {}",
                    summary.rows,
                    summary.accelerometer_path.display(),
                    summary.compass_path.display()
                );
                if let Some(started) = started_at {
                    text.push_str(&format!(" (session started {})", format_started(started)));
                }
                StatusMessage::Success(text)
            }
            Ok(StopOutcome::NothingToExport) => {
                StatusMessage::Info("No samples recorded".to_string())
            }
            Err(e) => StatusMessage::Error(format!("{}. Press Stop to retry or Discard.", e)),
        }
    }

    /// Message text.
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Success(text) | StatusMessage::Error(text) => {
                text
            }
        }
    }

    fn color(&self, theme: Theme) -> Option<Color32> {
        match self {
            StatusMessage::Info(_) => None,
            StatusMessage::Success(_) => Some(theme.success()),
            StatusMessage::Error(_) => Some(theme.error()),
        }
    }
}

fn format_started(started: &DateTime<Utc>) -> String {
    started
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Sensor display screen state.
pub struct SensorDisplayScreen {
    /// Accelerometer text block
    pub accelerometer_text: String,
    /// Compass text block
    pub compass_text: String,
    /// Last status message
    pub status: Option<StatusMessage>,
}

impl Default for SensorDisplayScreen {
    fn default() -> Self {
        Self {
            accelerometer_text: initial_text(Capability::Accelerometer),
            compass_text: initial_text(Capability::Compass),
            status: None,
        }
    }
}

impl DisplaySurface for SensorDisplayScreen {
    fn set_text(&mut self, capability: Capability, text: String) {
        match capability {
            Capability::Accelerometer => self.accelerometer_text = text,
            Capability::Compass => self.compass_text = text,
        }
    }
}

impl SensorDisplayScreen {
    /// Create a new screen showing the initial placeholder text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown for `capability`.
    pub fn text(&self, capability: Capability) -> &str {
        match capability {
            Capability::Accelerometer => &self.accelerometer_text,
            Capability::Compass => &self.compass_text,
        }
    }

    /// Render the screen.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        controller: &RecordingController,
        theme: Theme,
    ) -> Option<ScreenAction> {
        let mut action = None;

        ui.vertical(|ui| {
            self.render_recording_indicator(ui, controller, theme);

            ui.add_space(12.0);

            ui.horizontal_wrapped(|ui| {
                ReadingPanel::new(&self.accelerometer_text, theme.card_fill()).show(ui);
                ui.add_space(12.0);
                ReadingPanel::new(&self.compass_text, theme.card_fill()).show(ui);
            });

            ui.add_space(16.0);

            if let Some(a) = self.render_controls(ui, controller) {
                action = Some(a);
            }

            if let Some(status) = &self.status {
                ui.add_space(8.0);
                let mut text = RichText::new(status.text());
                if let Some(color) = status.color(theme) {
                    text = text.color(color);
                }
                ui.label(text);
            }
        });

        action
    }

    fn render_recording_indicator(
        &self,
        ui: &mut Ui,
        controller: &RecordingController,
        theme: Theme,
    ) {
        ui.horizontal(|ui| {
            if controller.is_recording() {
                ui.label(RichText::new("●").color(theme.recording()));
                ui.label(
                    RichText::new(format!("Recording: {} samples", controller.buffer().len()))
                        .strong(),
                );
            } else {
                ui.label(RichText::new("○").color(theme.muted_text()));
                ui.label(RichText::new("Not recording").weak());
            }
        });
    }

    fn render_controls(
        &self,
        ui: &mut Ui,
        controller: &RecordingController,
    ) -> Option<ScreenAction> {
        let mut action = None;

        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            let recording = controller.is_recording();

            if ui
                .add_enabled(
                    !recording,
                    egui::Button::new(RichText::new("Start").size(16.0))
                        .min_size(Vec2::new(120.0, 36.0)),
                )
                .clicked()
            {
                action = Some(ScreenAction::Start);
            }

            // Stop stays enabled while Idle so a failed export can be retried.
            if ui
                .add_enabled(
                    recording || controller.has_unsaved_samples(),
                    egui::Button::new(RichText::new("Stop").size(16.0))
                        .min_size(Vec2::new(120.0, 36.0)),
                )
                .clicked()
            {
                action = Some(ScreenAction::Stop);
            }

            if !recording && controller.has_unsaved_samples() {
                ui.add_space(16.0);
                if ui.button("Discard").clicked() {
                    action = Some(ScreenAction::Discard);
                }
            }
        });

        action
    }
}
