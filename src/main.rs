use hdb_forecast::application::bootstrap;
use hdb_forecast::config::Config;
use hdb_forecast::interfaces::ForecastApp;

use anyhow::Context;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env().context("Failed to load config")?;
    info!(
        "Loading resale transactions from {} ({})",
        config.data_source.base_url, config.data_source.kind
    );

    // The whole dataset is loaded before the first frame is drawn
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;
    let data = runtime.block_on(bootstrap::load(&config));
    drop(runtime);

    let app = ForecastApp::new(data, config.export.directory.clone());

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 860.0])
            .with_title("HDB Resale Price Forecast"),
        ..Default::default()
    };

    eframe::run_native(
        "HDB Resale Price Forecast",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
