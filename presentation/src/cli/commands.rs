//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for image-harvest
#[derive(Parser, Debug)]
#[command(name = "image-harvest")]
#[command(author, version, about = "Fetch JSON endpoints concurrently and collect the image URLs they list")]
#[command(long_about = r#"
image-harvest reads a newline-delimited list of URLs, fetches every one of
them concurrently, expects each response to be a JSON array of strings, and
writes the deduplicated union of all strings to the output file.

A URL that fails (connection error, non-2xx status, invalid JSON, or a body
that is not an array of strings) is logged and contributes nothing; the run
always completes and always writes the output file.

Configuration files are loaded from (in priority order):
1. HARVEST_* environment variables
2. --config <path>     Explicit config file
3. ./harvest.toml      Project-level config
4. ~/.config/image-harvest/config.toml   Global config

Example:
  image-harvest url-data
  image-harvest url-data -o images.txt --concurrency 32
"#)]
pub struct Cli {
    /// File with one URL per line
    pub input: Option<PathBuf>,

    /// File to write the discovered strings to
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum number of URLs fetched at once (default: all at once)
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors, and hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
