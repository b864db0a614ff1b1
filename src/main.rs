//! Sales Chart - Monthly Sales & Expenses Viewer
//!
//! Reads a small CSV file of monthly figures and shows them as a bar chart.

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use sales_chart::args::Args;
use sales_chart::gui::SalesChartApp;
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    if let Err(e) = init_logger(args.log_level()) {
        eprintln!("{e}");
    }
    debug!("Reading sales data from {}", args.data().display());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Sales Data Visualization"),
        ..Default::default()
    };

    let data_path = args.data().clone();
    let result = eframe::run_native(
        "Sales Data Visualization",
        options,
        Box::new(|cc| Ok(Box::new(SalesChartApp::new(cc, data_path)))),
    );
    if let Err(e) = &result {
        error!("Exiting with error: {e}");
    }
    result
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only log this crate at the requested level.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
