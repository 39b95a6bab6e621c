//! Debug menu viewer
//!
//! Opens a window over a simulated renderer with the lighting and stats
//! panels registered. The overlay is driven from the keyboard; the authoring
//! view sits in a side panel.

mod app;
mod bindings;
mod pipeline;

use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = debugmenu_core::config::load();
    for warning in debugmenu_core::config::validate(&config) {
        tracing::warn!("Config: {}", warning);
    }

    app::run(config)?;
    Ok(())
}
