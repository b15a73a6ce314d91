use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;

/// Print the effective configuration as TOML
#[derive(Args)]
pub struct ConfigCommand {}

impl ConfigCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<String> {
        config.to_toml()
    }
}
