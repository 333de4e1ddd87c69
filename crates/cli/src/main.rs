//! Smart object ingestion CLI
//!
//! A command-line tool for sending events and managing smart objects
//! through the ingestion API.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{events, objects};
use ingest_sdk::{ClientMetrics, IngestClient};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Smart object ingestion CLI
#[derive(Parser)]
#[command(name = "ingest")]
#[command(author, version, about = "CLI for the smart object ingestion API", long_about = None)]
pub struct Cli {
    /// Ingestion API host
    #[arg(long, env = "INGEST_HOST", global = true)]
    pub host: Option<String>,

    /// Ingestion API port
    #[arg(long, env = "INGEST_PORT", global = true)]
    pub port: Option<u16>,

    /// URI scheme (https unless talking to a local server)
    #[arg(long, env = "INGEST_SCHEME", global = true)]
    pub scheme: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, env = "INGEST_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Client configuration file (toml, json or yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table", global = true)]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Print client metrics to stderr after the command
    #[arg(long, global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send events
    #[command(subcommand)]
    Events(EventsCommands),

    /// Manage smart objects
    #[command(subcommand)]
    Objects(ObjectsCommands),

    /// Show or change saved settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum EventsCommands {
    /// Send a batch of events from a JSON array
    Send {
        /// JSON file with the events (`-` for stdin)
        #[arg(long)]
        file: PathBuf,

        /// Send the events on behalf of this device
        #[arg(long)]
        device_id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ObjectsCommands {
    /// Create a smart object from a JSON object
    Create {
        /// JSON file with the object (`-` for stdin)
        #[arg(long)]
        file: PathBuf,
    },

    /// Update a smart object
    Update {
        /// Device id of the object to update
        device_id: String,

        /// JSON file with the fields to update (`-` for stdin)
        #[arg(long)]
        file: PathBuf,
    },

    /// Delete a smart object
    Delete {
        /// Device id of the object to delete
        device_id: String,
    },

    /// Create or update a batch of smart objects from a JSON array
    Upsert {
        /// JSON file with the objects (`-` for stdin)
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show saved settings
    Show,

    /// Save the given --host, --port and --scheme for later invocations
    Set,
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so JSON results on stdout stay parseable
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn client(cli: &Cli) -> Result<IngestClient> {
    let settings = config::Settings::load().unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring saved settings");
        config::Settings::default()
    });
    let client_config = config::resolve(
        cli.config.as_deref(),
        &settings,
        config::Overrides {
            host: cli.host.clone(),
            port: cli.port,
            scheme: cli.scheme.clone(),
            token: cli.token.clone(),
        },
    )?;

    Ok(IngestClient::from_config(&client_config)?)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Events(ref events_cmd) => match events_cmd {
            EventsCommands::Send { file, device_id } => {
                events::send_events(&client(&cli)?, file, device_id.as_deref(), cli.format)?;
            }
        },
        Commands::Objects(ref objects_cmd) => {
            let client = client(&cli)?;
            match objects_cmd {
                ObjectsCommands::Create { file } => {
                    objects::create_object(&client, file)?;
                }
                ObjectsCommands::Update { device_id, file } => {
                    objects::update_object(&client, device_id, file)?;
                }
                ObjectsCommands::Delete { device_id } => {
                    objects::delete_object(&client, device_id)?;
                }
                ObjectsCommands::Upsert { file } => {
                    objects::upsert_objects(&client, file, cli.format)?;
                }
            }
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => {
                commands::config::show_settings(cli.format)?;
            }
            ConfigCommands::Set => {
                commands::config::set_settings(cli.host, cli.port, cli.scheme)?;
            }
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let print_metrics = cli.metrics;
    let outcome = run(cli);

    if print_metrics {
        eprint!("{}", ClientMetrics::new().render());
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
