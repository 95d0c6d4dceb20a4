#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use domain::{Currency, Quote, resolve_rate};
pub use engine::QuoteEngine;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Open the converter screen directly, skipping the landing page
    #[arg(long, default_value_t = false)]
    pub skip_landing: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
