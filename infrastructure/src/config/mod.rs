//! Configuration file loading for image-harvest
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HARVEST_*` environment variables (`HARVEST_HTTP__TIMEOUT_SECONDS=10`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./harvest.toml` or `./.harvest.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/image-harvest/config.toml`
//! 5. Default values
//!
//! Command line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileHarvestConfig, FileHttpConfig, FileInputConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
