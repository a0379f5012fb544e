//! Carenav CLI
//!
//! Renders the navigation model for a given location and grant set.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use carenav_kernel::Config;
use carenav_kernel::cli::{self, Runtime};
use carenav_kernel::menu::Expansion;

/// Permission-aware navigation model.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the navigation entries for a location.
    Render {
        /// Current path.
        #[arg(long, default_value = "/")]
        path: String,

        /// Granted capability (repeatable), e.g. --grant read:patients.
        #[arg(long = "grant")]
        grants: Vec<String>,

        /// Grant every capability.
        #[arg(long)]
        all_grants: bool,

        /// Override CARENAV_EXPANSION ("all" or "active-section").
        #[arg(long)]
        expansion: Option<Expansion>,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List every capability name.
    Capabilities,

    /// Validate a menu definition file (default: the built-in menu).
    Validate {
        #[arg(long)]
        menu: Option<PathBuf>,
    },

    /// Activate an entry and print the resulting location.
    Navigate {
        /// Starting path.
        #[arg(long, default_value = "/")]
        from: String,

        /// Label key of the entry to activate.
        #[arg(long)]
        to: String,

        #[arg(long = "grant")]
        grants: Vec<String>,

        #[arg(long)]
        all_grants: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;

    let output = match args.command {
        Command::Render {
            path,
            grants,
            all_grants,
            expansion,
            json,
        } => {
            if let Some(expansion) = expansion {
                config.expansion = expansion;
            }
            let runtime = Runtime::load(&config)?;
            let grants = cli::resolve_grants(&grants, all_grants)?;
            let granted: Vec<&str> = grants.iter().map(|c| c.as_str()).collect();
            info!(path = %path, grants = %granted.join(","), "rendering navigation");
            cli::cmd_render(&runtime, &grants, &path, json)?
        }
        Command::Capabilities => cli::cmd_capabilities(),
        Command::Validate { menu } => cli::cmd_validate(menu.or(config.menu_file).as_deref())?,
        Command::Navigate {
            from,
            to,
            grants,
            all_grants,
        } => {
            let runtime = Runtime::load(&config)?;
            let grants = cli::resolve_grants(&grants, all_grants)?;
            cli::cmd_navigate(&runtime, &grants, &from, &to)?
        }
    };

    print!("{output}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
