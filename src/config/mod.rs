//! Configuration system (layered: defaults < config file < env < explicit).

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bon::Builder;
use serde::Deserialize;

use crate::error::RadioError;
use crate::models::DEFAULT_LANGUAGE_TAG;
use crate::transport::http::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::util::retry::RetryPolicy;

/// Environment variables read by [`RadioConfig::with_env`].
pub const ENV_API_KEY: &str = "RADIO_CODE_API_KEY";
pub const ENV_API_URL: &str = "RADIO_CODE_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "RADIO_CODE_TIMEOUT_SECS";
pub const ENV_LANGUAGE: &str = "RADIO_CODE_LANGUAGE";
pub const ENV_MAX_ATTEMPTS: &str = "RADIO_CODE_MAX_ATTEMPTS";

/// Client configuration.
///
/// ```
/// use radio_code::config::RadioConfig;
///
/// let config = RadioConfig::builder()
///     .api_key("ABCD-ABCD-ABCD-ABCD")
///     .max_attempts(3)
///     .build();
/// assert_eq!(config.language_tag, "php");
/// ```
#[derive(Clone, Builder, PartialEq, Eq)]
pub struct RadioConfig {
    /// Activation key sent with every request.
    #[builder(into)]
    pub api_key: Option<String>,
    #[builder(default = DEFAULT_API_URL.to_string(), into)]
    pub base_url: String,
    #[builder(default = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
    /// Language tag for patterns of models built from responses.
    #[builder(default = DEFAULT_LANGUAGE_TAG.to_string(), into)]
    pub language_tag: String,
    /// Attempts per request; values above one enable retries.
    #[builder(default = 1)]
    pub max_attempts: u32,
}

impl fmt::Debug for RadioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("language_tag", &self.language_tag)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// On-disk layer; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    language_tag: Option<String>,
    max_attempts: Option<u32>,
}

impl RadioConfig {
    /// Defaults, then the default config file (if present), then the environment.
    pub fn load() -> Result<Self, RadioError> {
        Self::load_from(None)
    }

    /// Like [`RadioConfig::load`] with an explicit config file.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, RadioError> {
        let config = match path {
            Some(path) => Self::default().with_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::default().with_file(&path)?,
                None => Self::default(),
            },
        };
        config.with_env()
    }

    /// `config.toml` in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pelock", "radio-code")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Overlay values from a TOML file.
    pub fn with_file(self, path: &Path) -> Result<Self, RadioError> {
        let raw = std::fs::read_to_string(path)?;
        self.with_toml(&raw)
    }

    /// Overlay values from TOML text.
    pub fn with_toml(mut self, raw: &str) -> Result<Self, RadioError> {
        let file: ConfigFile = toml::from_str(raw)?;
        if let Some(key) = file.api_key {
            self.api_key = Some(key);
        }
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(tag) = file.language_tag {
            self.language_tag = tag;
        }
        if let Some(attempts) = file.max_attempts {
            self.max_attempts = attempts;
        }
        Ok(self)
    }

    /// Overlay values from environment variables (and `.env`, if present).
    pub fn with_env(self) -> Result<Self, RadioError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        self.with_env_lookup(|name| std::env::var(name).ok())
    }

    /// Overlay values using a custom variable lookup.
    pub fn with_env_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, RadioError> {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(ENV_API_URL) {
            self.base_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_env(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(tag) = lookup(ENV_LANGUAGE) {
            self.language_tag = tag;
        }
        if let Some(attempts) = lookup(ENV_MAX_ATTEMPTS) {
            self.max_attempts = parse_env(ENV_MAX_ATTEMPTS, &attempts)?;
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Retry policy, or `None` when each request gets a single attempt.
    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        (self.max_attempts > 1).then(|| RetryPolicy::with_max_attempts(self.max_attempts))
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, RadioError> {
    value
        .trim()
        .parse()
        .map_err(|_| RadioError::Configuration(format!("{name} has an invalid value '{value}'")))
}
