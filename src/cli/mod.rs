//! CLI entry point for the radio code calculator.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::RadioConfig;
use crate::error::RadioError;

/// Radio code calculator CLI
#[derive(Parser, Debug)]
#[command(
    name = "radio-code",
    version,
    about = "Generate radio unlock codes with the Radio Code Calculator web API"
)]
pub struct Cli {
    /// Activation key (overrides RADIO_CODE_API_KEY and the config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Web API endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Language tag used to pick regex patterns
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Configuration file path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the license details of the activation key
    Login,
    /// List radio models supported by the web API
    List,
    /// Show the input rules of a radio model
    Info(ModelArgs),
    /// Calculate a radio code
    Calc(CalcArgs),
    /// Validate a serial number offline against the built-in catalog
    Validate(SerialArgs),
    /// List radio models of the built-in catalog
    Models,
}

/// Arguments naming a radio model.
#[derive(Parser, Debug)]
pub struct ModelArgs {
    /// Radio model name (e.g. ford-m-series)
    pub model: String,
}

/// Arguments for `radio-code validate`.
#[derive(Parser, Debug)]
pub struct SerialArgs {
    /// Radio model name (e.g. ford-m-series)
    pub model: String,

    /// Radio serial number / pre code
    pub serial: String,

    /// Extra data, e.g. a supplier code
    #[arg(short, long)]
    pub extra: Option<String>,
}

/// Arguments for `radio-code calc`.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub input: SerialArgs,

    /// Skip offline validation before sending the request
    #[arg(long)]
    pub no_validate: bool,
}

impl Cli {
    /// Layered configuration with command line flags on top.
    pub fn config(&self) -> Result<RadioConfig, RadioError> {
        let mut config = RadioConfig::load_from(self.config.as_deref())?;
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(url) = &self.url {
            config.base_url = url.clone();
        }
        if let Some(language) = &self.language {
            config.language_tag = language.clone();
        }
        Ok(config)
    }
}
