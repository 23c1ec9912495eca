//! Birthday Pass CLI - redeem passes and manage the memory flipbook link.
//!
//! # Usage
//!
//! ```bash
//! # Show every pass and its status
//! bp-cli list
//!
//! # Redeem a pass (asks "Redeem this pass now?" first)
//! bp-cli redeem food-treat
//!
//! # Reset every pass without prompting
//! bp-cli reset --yes
//!
//! # Save the flipbook link
//! bp-cli link set https://heyzine.com/flip-book/abc123.html
//! ```
//!
//! # Commands
//!
//! - `list` - Show the greeting and every pass
//! - `details` - Show one pass
//! - `redeem` - Redeem a pass
//! - `reset` - Return every pass to available
//! - `status` - Show how many passes are used
//! - `link` - Show, set or clear the flipbook link
//! - `playlist` - Show the playlist embed URL
//! - `letter` - Show the birthday letter

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use birthday_pass_core::store::FileBackend;
use birthday_pass_core::{FlipbookLinkController, RedemptionController};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod prompt;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "bp-cli")]
#[command(author, version, about = "Birthday Pass CLI")]
struct Cli {
    /// Directory holding the persisted state (overrides `BIRTHDAY_PASS_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON file with a custom pass catalog (overrides `BIRTHDAY_PASS_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the greeting and every pass
    List,
    /// Show one pass
    Details {
        /// Pass ID (e.g. `food-treat`)
        id: String,
    },
    /// Redeem a pass
    Redeem {
        /// Pass ID (e.g. `food-treat`)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Return every pass to available
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show how many passes are used
    Status,
    /// Manage the memory flipbook link
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },
    /// Show the playlist embed URL
    Playlist,
    /// Show the birthday letter
    Letter,
}

#[derive(Subcommand)]
enum LinkAction {
    /// Show the current link
    Show,
    /// Save a new link
    Set {
        /// Flipbook share URL
        url: String,
    },
    /// Reset the link to the configured default
    Clear,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bp_cli=info,birthday_pass_core=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?.with_overrides(cli.data_dir, cli.catalog);
    let backend = Arc::new(FileBackend::new(&config.data_dir));
    tracing::debug!(data_dir = %config.data_dir.display(), "Using data directory");

    match cli.command {
        Commands::List => {
            let passes = RedemptionController::load(config.load_catalog()?, backend);
            commands::passes::list(&passes, &config.friend_name);
        }
        Commands::Details { id } => {
            let passes = RedemptionController::load(config.load_catalog()?, backend);
            commands::passes::details(&passes, &id)?;
        }
        Commands::Redeem { id, yes } => {
            let mut passes = RedemptionController::load(config.load_catalog()?, backend);
            commands::passes::redeem(&mut passes, &id, prompt::gate(yes).as_mut())?;
        }
        Commands::Reset { yes } => {
            let mut passes = RedemptionController::load(config.load_catalog()?, backend);
            commands::passes::reset(&mut passes, prompt::gate(yes).as_mut());
        }
        Commands::Status => {
            let passes = RedemptionController::load(config.load_catalog()?, backend);
            commands::passes::status(&passes);
        }
        Commands::Link { action } => {
            let mut links = FlipbookLinkController::load(config.flipbook_default.clone(), backend);
            match action {
                LinkAction::Show => commands::link::show(&links),
                LinkAction::Set { url } => commands::link::set(&mut links, &url)?,
                LinkAction::Clear => commands::link::clear(&mut links),
            }
        }
        Commands::Playlist => commands::extras::playlist(&config),
        Commands::Letter => commands::extras::letter(&config)?,
    }
    Ok(())
}
