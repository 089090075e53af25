//! # Questlog - Daily habits as RPG progression
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: AppConfig (config.json + CLI overrides)          │
//! │    ├── Creates: FileStore, JsonGameStateCodec, SystemClock     │
//! │    ├── Opens: GameSession (use case) and runs the day check    │
//! │    └── Runs: one command against the session                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   questlog                      - Show the dashboard
//!   questlog init [NAMES...]      - Pick objectives and start playing
//!   questlog complete <ID|NAME>   - Complete an objective for today
//!   questlog status               - Show the dashboard
//!   questlog reset                - Run the daily reset check
//!   questlog templates            - List selectable objectives

mod commands;
mod config;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use questlog_adapter::{FileStore, JsonGameStateCodec, SystemClock};
use questlog_usecase::GameSession;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::{CompleteCommand, InitCommand, ResetCommand, StatusCommand, TemplatesCommand};
use config::AppConfig;

/// The session as wired for the command line
pub type Session = GameSession<FileStore, JsonGameStateCodec, SystemClock>;

#[derive(Parser)]
#[command(name = "questlog")]
#[command(about = "Questlog - level up your daily habits")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the save file (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose your objectives and start a new game
    Init(InitCommand),
    /// Complete an objective for today
    Complete(CompleteCommand),
    /// Show levels, streaks and today's progress
    Status(StatusCommand),
    /// Clear today's completions if the day changed
    Reset(ResetCommand),
    /// List the objectives you can choose from
    Templates(TemplatesCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?.with_data_dir(cli.data_dir);
    debug!(data_dir = %config.data_dir.display(), key = %config.storage_key, "Config loaded");

    // The catalog needs no session
    if let Some(Commands::Templates(cmd)) = &cli.command {
        return cmd.run();
    }

    let mut session = open_session(&config);
    session.start();

    match cli.command {
        Some(Commands::Init(cmd)) => cmd.run(&mut session),
        Some(Commands::Complete(cmd)) => cmd.run(&mut session),
        Some(Commands::Reset(cmd)) => cmd.run(&mut session),
        Some(Commands::Status(cmd)) => cmd.run(&session),
        Some(Commands::Templates(_)) => Ok(()),
        None => StatusCommand::default().run(&session),
    }
}

fn open_session(config: &AppConfig) -> Session {
    GameSession::open_with_key(
        FileStore::new(&config.data_dir),
        JsonGameStateCodec::new(),
        SystemClock::new(),
        config.storage_key.clone(),
    )
}
