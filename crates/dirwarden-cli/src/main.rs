use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "dirwarden",
    version,
    about = "Warns destructive tools away from sensitive directories"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a directory (defaults to the current one)
    Check {
        path: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Exit successfully even when the directory is dangerous
        #[arg(long)]
        force: bool,
    },
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
    Config {
        #[arg(long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match cli.command {
        Commands::Check { path, json, force } => {
            commands::check::execute(commands::check::CheckInputs {
                config_path: cli.config,
                path,
                json,
                force,
            })
        }
        Commands::Init { path, force } => {
            let config_path = commands::config::config_path(path.or(cli.config))?;
            commands::config::init(&config_path, force)
        }
        Commands::Config { print } => {
            if print {
                commands::config::print_effective(cli.config)
            } else {
                Ok(())
            }
        }
    }
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dirwarden=debug,policy_engine=debug")
    } else {
        EnvFilter::new("dirwarden=info,policy_engine=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
