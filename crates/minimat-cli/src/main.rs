use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod help;
mod repl;

use config::Config;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "minimat", version, about, after_help = help::COMMAND_REFERENCE)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load vectors from a CSV file (name,x,y,z per line) before starting
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Maximum number of stored vectors (default: unbounded)
    #[arg(long, value_name = "N")]
    max_vectors: Option<usize>,

    /// Prompt shown in interactive sessions
    #[arg(long)]
    prompt: Option<String>,

    /// Run a calculator line and exit (repeatable, runs in order)
    #[arg(short, long, value_name = "LINE")]
    eval: Vec<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

/// Effective configuration: file and environment, then CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(prompt) = &cli.prompt {
        config.prompt.clone_from(prompt);
    }
    if cli.max_vectors.is_some() {
        config.max_vectors = cli.max_vectors;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Config { action }) => {
            init_logging(DEFAULT_LOG_LEVEL);
            match action {
                ConfigAction::Show => commands::config::show_config(&load_config(&cli)?)?,
                ConfigAction::Path => commands::config::show_path()?,
                ConfigAction::Example => commands::config::show_example()?,
                ConfigAction::Init => commands::config::init_config()?,
            }
        }
        None => {
            let config = load_config(&cli)?;
            init_logging(&config.log_level);

            let preload = cli.load.clone().or_else(|| config.autoload.clone());
            commands::run_session(&config, preload, &cli.eval)?;
        }
    }

    Ok(())
}
