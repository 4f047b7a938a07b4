#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

// Session state and request bookkeeping
pub mod engine;

// Re-export commonly used types
pub use api::{ApiError, PredictionClient};
pub use config::ApiSettings;
pub use domain::{FileCandidate, PredictionResponse, SelectedFile};
pub use error::AppError;
pub use models::ForecastView;
pub use ui::ForecastApp;
pub use utils::app_time;

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction service (overrides FORECAST_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// CSV file to load on start-up
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds; 0 or absent keeps the network default
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings::from_env(self.api_url.as_deref(), self.timeout_secs)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    client: PredictionClient,
    initial_file: Option<FileCandidate>,
) -> Box<dyn eframe::App> {
    let app = ui::ForecastApp::new(cc, client, initial_file);
    Box::new(app)
}
