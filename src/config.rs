use crate::decoder::DecodeOptions;
use crate::errors::AppResult;
use crate::script::PushdataMode;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "slp-codec.toml";

/// Application configuration loaded from slp-codec.toml or environment variables
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub codec: CodecConfig,
    pub output: OutputConfig,
}

/// Decoder settings for the command-line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Fail on unsupported opcodes instead of ending chunk extraction
    pub strict_pushdata: bool,
    /// Largest script accepted for decoding; 0 disables the bound
    pub max_script_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict_pushdata: false,
            max_script_len: 10_000,
        }
    }
}

impl From<&CodecConfig> for DecodeOptions {
    fn from(codec: &CodecConfig) -> Self {
        DecodeOptions {
            pushdata_mode: if codec.strict_pushdata {
                PushdataMode::Strict
            } else {
                PushdataMode::Permissive
            },
            max_script_len: (codec.max_script_len > 0).then_some(codec.max_script_len),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected text or json)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from slp-codec.toml and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let config = Config::builder()
            // Start with default values
            .set_default("codec.strict_pushdata", defaults.codec.strict_pushdata)?
            .set_default(
                "codec.max_script_len",
                defaults.codec.max_script_len as i64,
            )?
            .set_default("output.format", defaults.output.format.to_string())?
            .add_source(file)
            // SLP_CODEC__MAX_SCRIPT_LEN style overrides for any key
            .add_source(
                config::Environment::with_prefix("SLP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(value) = env::var("SLP_STRICT_PUSHDATA") {
            app_config.codec.strict_pushdata = parse_bool(&value).ok_or_else(|| {
                ConfigError::Message(format!("SLP_STRICT_PUSHDATA: invalid boolean '{}'", value))
            })?;
        }

        if let Ok(value) = env::var("SLP_MAX_SCRIPT_LEN") {
            app_config.codec.max_script_len = value.trim().parse().map_err(|_| {
                ConfigError::Message(format!("SLP_MAX_SCRIPT_LEN: invalid length '{}'", value))
            })?;
        }

        if let Ok(value) = env::var("SLP_OUTPUT_FORMAT") {
            app_config.output.format = value
                .parse()
                .map_err(|e| ConfigError::Message(format!("SLP_OUTPUT_FORMAT: {}", e)))?;
        }

        Ok(app_config)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::from(&self.codec)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> AppResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
