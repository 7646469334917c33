//! CLI entrypoint for image-harvest
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use harvest_application::{HarvestInput, HarvestUseCase};
use harvest_infrastructure::{
    ConfigLoader, FileConfig, ReqwestJsonFetcher, read_url_file, write_result_file,
};
use harvest_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Log lines go through the reporter so they never tear the progress bar
    let progress = ProgressReporter::new();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli, progress.stderr_log_writer())?;

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let input_path = config
        .input
        .path
        .clone()
        .context("No URL file given. Pass it as an argument or set [input] path")?;

    info!("Starting image-harvest");

    let urls = read_url_file(&input_path).await?;

    // === Dependency Injection ===
    // One shared client for the whole run
    let fetcher = Arc::new(ReqwestJsonFetcher::from_config(&config.http)?);
    let use_case = HarvestUseCase::new(fetcher);

    let input = HarvestInput::new(urls).with_params(config.harvest.to_params());
    let report = if cli.quiet || !config.harvest.show_progress {
        use_case.execute(input).await?
    } else {
        use_case.execute_with_progress(input, &progress).await?
    };

    let written = write_result_file(&config.output.path, &report.results).await?;
    info!(
        "Wrote {} image urls to {}",
        written,
        config.output.path.display()
    );

    if !cli.quiet {
        println!(
            "{}",
            ConsoleFormatter::format_summary(&report, &config.output.path)
        );
    }

    Ok(())
}

/// Command line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(input) = &cli.input {
        config.input.path = Some(input.clone());
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    if let Some(max) = cli.concurrency {
        config.harvest.max_concurrency = Some(max);
    }
    if let Some(secs) = cli.timeout {
        config.http.timeout_seconds = Some(secs);
    }
    if let Some(user_agent) = &cli.user_agent {
        config.http.user_agent = user_agent.clone();
    }
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_logging<W>(cli: &Cli, stderr: W) -> Result<Option<WorkerGuard>>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace", // -vv or more
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_writer(stderr)
        .with_target(false);

    let Some(path) = &cli.log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(Some(guard))
}
