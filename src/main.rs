//! Oxshelf - Volume Collection Checklist
//!
//! This is the main entry point for the Oxshelf application. It initializes
//! logging, GTK/Libadwaita, and starts the main application loop.

use {
    anyhow::{Context, Result},
    tracing_subscriber::EnvFilter,
};

use oxshelf::ui::OxshelfApplication;

/// Main entry point for the Oxshelf application.
///
/// This function initializes the tracing subscriber, the GTK and
/// Libadwaita libraries, creates the main application instance, and starts
/// the event loop.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("oxshelf=info")),
        )
        .init();

    // Initialize GTK and Libadwaita
    libadwaita::gtk::init().context("Failed to initialize GTK")?;
    let _ = libadwaita::init();

    // Create and run the application
    let app = OxshelfApplication::new()?;
    app.run();

    Ok(())
}
