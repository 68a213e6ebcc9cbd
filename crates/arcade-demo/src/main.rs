//! # Arcade
//!
//! Runs the fixed game-window scenario. Status lines go to stdout, logs go
//! to stderr. Always exits successfully.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use std::io;

use anyhow::Result;
use arcade_demo::{ScenarioConfig, Session};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("arcade=info".parse()?))
        .init();

    info!("Arcade starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = ScenarioConfig::load();
    for warning in config.validate().warnings {
        warn!("Scenario: {warning}");
    }
    info!(
        "Running {} windows, {} actions",
        config.windows.len(),
        config.total_actions()
    );

    let mut session = Session::new(&config);
    let stdout = io::stdout();
    if let Err(e) = session.run(&mut stdout.lock()) {
        warn!("Scenario output interrupted: {e}");
    }

    info!("Arcade shutdown complete");
    Ok(())
}
