//! PokéFlip client binary.
//!
//! Main entry point for the PokéFlip client.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime setup (species catalog, hub, local runtime, optional bot) via RuntimeBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! All components are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Duel the local bot
//! cargo run -p pokeflip-client
//!
//! # Token demo only, no bot
//! ENABLE_BOT=false cargo run -p pokeflip-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{ClientConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use pokeflip_client::{Client, gallery_view};

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (guard flushes the log file on exit)
    let _log_guard = logging::setup_logging(client_config.session_id.as_deref())?;

    tracing::info!("Starting PokéFlip client");
    tracing::info!("Session ID: {:?}", client_config.session_id);
    tracing::info!("Bot opponent: {}", client_config.bot.enabled);
    tracing::info!("Tie window: {}ms", client_config.game.tie_window_ms);

    // 3. Build runtime setup (independent layer)
    tracing::debug!("Building runtime...");
    let setup = RuntimeBuilder::new(client_config).build().await?;

    tracing::info!(token = setup.runtime.token(), "Runtime built successfully");

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config, gallery_view(&setup.catalog));

    // 5. Build and run
    let client = Client::builder().runtime(setup).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
