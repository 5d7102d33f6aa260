//! Main application state and egui integration.
//!
//! Polling runs on the UI thread: each frame checks whether a tick is due and
//! asks egui to repaint again when the next one is.

use eframe::egui;

use sensorlog::polling::PollingLoop;
use sensorlog::recording::RecordingController;
use sensorlog::sensors::create_reader;
use sensorlog::storage::config::{self, AppConfig};
use sensorlog::ui::screens::{ScreenAction, SensorDisplayScreen, StatusMessage};
use sensorlog::ui::theme::Theme;
use std::time::Instant;

/// Main application state.
pub struct SensorLogApp {
    /// UI theme
    theme: Theme,
    /// Sensor polling loop
    polling: PollingLoop,
    /// Recording state and sample buffer
    controller: RecordingController,
    /// Sensor display screen state
    screen: SensorDisplayScreen,
}

impl SensorLogApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        let reader = create_reader(&config.sensors);
        tracing::info!("Using {} sensor backend", reader.name());

        Self {
            theme,
            polling: PollingLoop::new(reader),
            controller: RecordingController::with_defaults(),
            screen: SensorDisplayScreen::new(),
        }
    }

    /// Toggle the theme between dark and light.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
    }

    /// Apply a button press from the screen.
    fn handle_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::Start => {
                self.controller.start();
                self.screen.status = None;
            }
            ScreenAction::Stop => {
                let result = self.controller.stop();
                self.screen.status = Some(StatusMessage::from_stop(&result));
            }
            ScreenAction::Discard => {
                self.controller.discard();
                self.screen.status =
                    Some(StatusMessage::Info("Discarded unsaved samples".to_string()));
            }
        }
    }
}

impl eframe::App for SensorLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.polling.poll(now, &mut self.controller, &mut self.screen);
        ctx.request_repaint_after(self.polling.time_until_next_tick(now));

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("SensorLog");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme.toggle_label()).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = self.screen.show(ui, &self.controller, self.theme);
        });
        if let Some(action) = action {
            self.handle_action(action);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(format!("Sensors: {}", self.polling.reader_name()));
                ui.separator();
                ui.label(format!(
                    "Output: {}",
                    self.controller.exporter().output_dir().display()
                ));
            });
        });
    }
}
