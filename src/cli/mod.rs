use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// SLP token OP_RETURN encoder and decoder
#[derive(Parser)]
#[command(name = "slp-codec")]
#[command(about = "SLP token OP_RETURN encoder and decoder")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./slp-codec.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode an SLP OP_RETURN script given as hex
    Decode(commands::decode::DecodeCommand),
    /// Build an SLP OP_RETURN script and print it as hex
    Encode(commands::encode::EncodeCommand),
    /// Print the effective configuration as TOML
    Config(commands::show_config::ConfigCommand),
}

impl Cli {
    /// Load configuration from --config, or from the default locations
    pub fn load_config(&self) -> AppResult<AppConfig> {
        let config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };
        Ok(config)
    }

    /// Run the selected command and return what it would print
    pub fn execute(&self) -> AppResult<String> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Decode(command) => command.run(&config),
            Commands::Encode(command) => command.run(&config),
            Commands::Config(command) => command.run(&config),
        }
    }
}

pub fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let output = cli.execute()?;
    println!("{}", output);
    Ok(())
}
