//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["harvest.toml", ".harvest.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `HARVEST_` environment variables, nested with `__`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./harvest.toml` or `./.harvest.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/image-harvest/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("HARVEST_").split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/image-harvest/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("image-harvest").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        for line in Self::describe_config_sources(config_path) {
            println!("{}", line);
        }
    }

    /// One line per configuration layer, highest priority first
    pub fn describe_config_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec![
            "Configuration sources (in priority order):".to_string(),
            "  [FLAGS] Command line flags".to_string(),
            "  [ENV  ] HARVEST_* variables".to_string(),
        ];

        match config_path {
            Some(path) if path.exists() => {
                lines.push(format!("  [FOUND] Explicit: {}", path.display()))
            }
            Some(path) => lines.push(format!("  [MISS ] Explicit: {}", path.display())),
            None => lines.push("  [     ] Explicit: --config <path>".to_string()),
        }

        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project:  {}", path.display()));
        } else {
            lines.push("  [     ] Project:  ./harvest.toml or ./.harvest.toml".to_string());
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:   {}", mark, path.display()));
        }

        lines.push("  [     ] Default:  built-in defaults".to_string());
        lines
    }
}
