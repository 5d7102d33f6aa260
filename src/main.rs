//! SensorLog - Motion Sensor Logger
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SensorLog v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_min_inner_size([400.0, 320.0])
            .with_title("SensorLog"),
        ..Default::default()
    };

    eframe::run_native(
        "SensorLog",
        options,
        Box::new(|cc| Ok(Box::new(app::SensorLogApp::new(cc)))),
    )
}
