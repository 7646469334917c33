//! Progress reporting for harvest runs

use super::log_writer::ProgressLogWriter;
use colored::Colorize;
use harvest_application::HarvestProgress;
use harvest_domain::{HarvestReport, UrlOutcome};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::io;
use std::sync::Mutex;

/// Reports progress during a harvest run with a progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_multi(MultiProgress::new())
    }

    pub fn with_multi(multi: MultiProgress) -> Self {
        Self {
            multi,
            bar: Mutex::new(None),
        }
    }

    /// Writer factory for log output that must not tear the bar.
    ///
    /// Plug it into `tracing_subscriber::fmt::layer().with_writer(..)`.
    pub fn stderr_log_writer(
        &self,
    ) -> impl Fn() -> ProgressLogWriter<io::Stderr> + Send + Sync + use<> {
        let multi = self.multi.clone();
        move || ProgressLogWriter::new(multi.clone(), io::stderr())
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn status_line(outcome: &UrlOutcome) -> String {
        match &outcome.error {
            None => format!("{} {} ({})", "v".green(), outcome.url, outcome.count()),
            Some(e) => format!("{} {} [{}]", "x".red(), outcome.url, e.kind()),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl HarvestProgress for ProgressReporter {
    fn on_start(&self, total_urls: usize) {
        let pb = self.multi.add(ProgressBar::new(total_urls as u64));
        pb.set_style(Self::style());
        pb.set_prefix("Harvesting");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_url_complete(&self, outcome: &UrlOutcome) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::status_line(outcome));
            pb.inc(1);
        }
    }

    fn on_finish(&self, report: &HarvestReport) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!(
                "{} ({} image urls)",
                "done!".green(),
                report.total()
            ));
        }
    }
}
