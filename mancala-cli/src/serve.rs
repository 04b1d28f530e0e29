//! Serve command - start the web server

use anyhow::Result;
use clap::Args;

use mancala_core::GameConfig;
use mancala_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Stones seeded into each house on a fresh board
    #[arg(long, default_value_t = 6)]
    pub stones_per_house: u32,

    /// Playable houses per side
    #[arg(long, default_value_t = 6)]
    pub houses: usize,
}

pub fn run(args: ServeArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!(
        "starting mancala server on port {} ({} houses, {} stones each)",
        config.port,
        config.game.houses,
        config.game.stones_per_house
    );

    start_server(config)
}

/// Build the server configuration from command arguments
fn configure_server(args: &ServeArgs) -> Result<ServerConfig> {
    if args.houses == 0 {
        anyhow::bail!("at least one house per side is required");
    }

    Ok(ServerConfig {
        port: args.port,
        game: GameConfig {
            houses: args.houses,
            stones_per_house: args.stones_per_house,
        },
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}
