//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [input]
//! path = "url-data"
//!
//! [output]
//! path = "resulturls"
//!
//! [http]
//! timeout_seconds = 300
//! user_agent = "image-harvest/0.1"
//!
//! [harvest]
//! max_concurrency = 64
//! ```

use harvest_application::HarvestParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("http.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("http.connect_timeout_seconds cannot be 0")]
    InvalidConnectTimeout,

    #[error("http.user_agent cannot be empty")]
    EmptyUserAgent,

    #[error("harvest.max_concurrency cannot be 0")]
    InvalidConcurrency,
}

/// Raw input configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputConfig {
    /// Newline-delimited URL file
    pub path: Option<PathBuf>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Result file, one discovered string per line
    pub path: PathBuf,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("resulturls"),
        }
    }
}

/// Raw HTTP client configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Whole-request timeout applied to every fetch
    pub timeout_seconds: Option<u64>,
    /// Connect phase timeout
    pub connect_timeout_seconds: Option<u64>,
    pub user_agent: String,
    /// Idle pooled connections kept per host
    pub pool_max_idle_per_host: Option<usize>,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: Some(300),
            connect_timeout_seconds: None,
            user_agent: concat!("image-harvest/", env!("CARGO_PKG_VERSION")).to_string(),
            pool_max_idle_per_host: None,
        }
    }
}

/// Raw harvest configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHarvestConfig {
    /// Maximum URLs in flight; unset means all at once
    pub max_concurrency: Option<usize>,
    /// Show the progress bar
    pub show_progress: bool,
}

impl Default for FileHarvestConfig {
    fn default() -> Self {
        Self {
            max_concurrency: None,
            show_progress: true,
        }
    }
}

impl FileHarvestConfig {
    pub fn to_params(&self) -> HarvestParams {
        HarvestParams::default().with_max_concurrency(self.max_concurrency)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub input: FileInputConfig,
    pub output: FileOutputConfig,
    pub http: FileHttpConfig,
    pub harvest: FileHarvestConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.http.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.http.connect_timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidConnectTimeout);
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUserAgent);
        }
        if self.harvest.max_concurrency == Some(0) {
            return Err(ConfigValidationError::InvalidConcurrency);
        }
        Ok(())
    }
}
