// src/main.rs
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use eframe::egui;

mod app;
mod fetch;
mod model;
mod projection;
mod settings;
mod state;
mod ui;

use app::ReviewLensApp;
use fetch::{AnalyticsSource, HttpAnalyticsSource, SampleAnalyticsSource};
use settings::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::load()?;
    let source: Arc<dyn AnalyticsSource> = match &settings.api_base_url {
        Some(base_url) => Arc::new(HttpAnalyticsSource::new(
            base_url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )?),
        None => {
            log::info!("no api_base_url configured, using the built-in sample source");
            Arc::new(SampleAnalyticsSource)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("ReviewLens"),
        ..Default::default()
    };

    eframe::run_native(
        "ReviewLens",
        options,
        Box::new(move |_cc| Box::new(ReviewLensApp::new(&settings, source))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
