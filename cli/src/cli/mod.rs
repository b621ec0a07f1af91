pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agent-ui-backend")]
#[command(author, version, about = "UI backend - reverse proxy between the browser UI and the AI agent service")]
pub struct Cli {
    /// Path to config file (checked in order: local config.toml, ~/.config/agent-ui-backend/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the UI backend server
    Start {
        /// Port to listen on (overrides config and the PORT env variable)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show effective configuration and probe a running instance
    Status,
}
