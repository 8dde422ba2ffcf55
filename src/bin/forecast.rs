//! Headless forecast CLI
//!
//! Loads the resale dataset the same way the dashboard does, then either lists the
//! available segments or prints and exports a forecast for one of them.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hdb_forecast::application::bootstrap;
use hdb_forecast::application::export::{forecast_to_csv, write_export};
use hdb_forecast::config::Config;
use hdb_forecast::domain::record::Segment;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "HDB resale price forecaster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every town and the flat types sold there
    Segments,
    /// Forecast one segment over the default horizon
    Run {
        /// Town name, e.g. BEDOK
        #[arg(short, long)]
        town: String,

        /// Flat type, e.g. "4 ROOM"
        #[arg(short, long)]
        flat_type: String,

        /// Directory to write forecast.csv into (defaults to EXPORT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load config")?;
    let data = bootstrap::load(&config).await;

    if !data.complete {
        info!("Working from a partial dataset of {} records", data.dataset.len());
    }

    match cli.command {
        Commands::Segments => {
            for town in data.index.towns() {
                println!("{}: {}", town, data.index.flat_types(town).join(", "));
            }
        }
        Commands::Run {
            town,
            flat_type,
            output,
        } => {
            let segment = Segment::new(town, flat_type);
            if !data.index.contains(&segment) {
                bail!("No transactions recorded for {}", segment);
            }

            let forecast = data.service.forecast(&segment)?;
            println!(
                "Forecasted prices for {} in {} ({} transactions):",
                segment.flat_type, segment.town, forecast.sample_count
            );
            for point in &forecast.points {
                println!("{}  {:>12.2}", point.date.format("%Y-%m-%d"), point.predicted_price);
            }

            let csv = forecast_to_csv(&forecast.points)?;
            let dir = output.unwrap_or_else(|| config.export.directory.clone());
            let path = write_export(&dir, &csv)?;
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}
