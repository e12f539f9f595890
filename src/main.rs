//! findash - Financial Executive Dashboard pipeline
//!
//! Fetches the published budget sheet, cleans and aggregates it, and emits
//! the chart specifications for the presentation layer as JSON.

mod charts;
mod dashboard;
mod data;
mod report;
mod stats;

use anyhow::{Context, Result};
use dashboard::Dashboard;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Published Google Sheet CSV export consumed by the dashboard.
const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vST5ypw4O-nG04NnYeB-lZLBw9S3GUwlAXSjveGkS4SzPQAsV12oP0yvGhExO7otr5UGEu6tWrLqvJ_/pub?gid=1743156171&single=true&output=csv";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    info!("loading source sheet");
    let dashboard = Dashboard::load(SHEET_URL).context("loading source sheet")?;
    info!(availability = ?dashboard.availability(), "dataset ready");

    let view = dashboard
        .render(None)
        .context("rendering dashboard sections")?;

    serde_json::to_writer_pretty(std::io::stdout().lock(), &view)?;
    println!();
    info!("dashboard emitted");
    Ok(())
}
