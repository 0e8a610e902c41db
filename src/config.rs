//! Settings for talking to NCBI E-utilities
//!
//! Values come from three layers, highest priority first:
//! 1. command-line flags (and their environment variables)
//! 2. an optional TOML config file with a `[pubmed]` table
//! 3. built-in defaults
//!
//! ```toml
//! [pubmed]
//! email = "me@example.org"
//! api_key = "0123456789abcdef"
//! batch_size = 100
//! request_delay_ms = 150
//! ```

use crate::cli::CliArgs;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default tool name reported to NCBI
pub const DEFAULT_TOOL: &str = "pharma_papers";

/// Default contact email reported to NCBI
pub const DEFAULT_EMAIL: &str = "user@example.com";

/// Default number of PMIDs per EFetch request
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Largest batch E-utilities accepts for a single request
pub const MAX_BATCH_SIZE: usize = 10_000;

/// Default pause between EFetch batches (milliseconds)
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

/// Default HTTP timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries per request
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// E-utilities client settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tool name sent with every request
    pub tool: String,
    /// Contact email sent with every request
    pub email: String,
    /// NCBI API key (raises the rate limit from 3 to 10 requests/second)
    pub api_key: Option<String>,
    /// E-utilities base URL
    pub base_url: String,
    /// PMIDs per EFetch request
    pub batch_size: usize,
    /// Pause between EFetch batches
    pub request_delay_ms: u64,
    /// HTTP timeout
    pub timeout_secs: u64,
    /// Retries per request on transient failures
    pub max_retries: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Layout of the config file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    pubmed: Settings,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(file.pubmed)
    }

    /// Load settings from a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings = Self::from_toml_str(&content, path)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Resolve settings for a run: config file (if any) overlaid with CLI flags
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        let base = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let settings = base.apply_cli(args);
        settings.validate()?;
        Ok(settings)
    }

    /// Overlay values given on the command line
    pub fn apply_cli(mut self, args: &CliArgs) -> Self {
        if let Some(email) = &args.email {
            self.email = email.clone();
        }
        if let Some(api_key) = &args.api_key {
            self.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(batch_size) = args.batch_size {
            self.batch_size = batch_size;
        }
        if let Some(delay) = args.delay_ms {
            self.request_delay_ms = delay;
        }
        self
    }

    /// Check that the settings can be used to build a client
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty("tool", &self.tool)?;
        validate_non_empty("email", &self.email)?;

        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::invalid_value(
                "batch_size",
                self.batch_size,
                format!("must be between 1 and {}", MAX_BATCH_SIZE),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                "timeout_secs",
                self.timeout_secs,
                "must be at least 1",
            ));
        }
        if let Some(key) = &self.api_key {
            validate_non_empty("api_key", key)?;
        }
        Ok(())
    }

    /// HTTP timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Inter-batch pause as a Duration
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ConfigError> {
    match Url::parse(value) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::invalid_value(
                field,
                value,
                format!("unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(ConfigError::invalid_value(
            field,
            value,
            format!("invalid URL: {}", e),
        )),
    }
}

fn validate_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid_value(
            field,
            value,
            "must not be empty",
        ));
    }
    Ok(())
}
