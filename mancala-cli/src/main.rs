//! Mancala CLI
//!
//! Commands:
//! - serve: start the HTTP server
//! - play: hot-seat game in the terminal

mod play;
mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mancala")]
#[command(about = "Two-player mancala board game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Play a hot-seat game in the terminal
    Play(play::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => serve::run(args),
        Commands::Play(args) => play::run(args),
    }
}
