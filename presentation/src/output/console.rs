//! Console output formatter for harvest reports

use colored::Colorize;
use harvest_domain::HarvestReport;
use std::path::Path;

/// Formats a harvest report for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the end-of-run summary
    pub fn format_summary(report: &HarvestReport, output_path: &Path) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "=== Harvest Summary ===".cyan().bold()));
        output.push_str(&format!(
            "{} {}\n",
            "URLs attempted:".bold(),
            report.attempted()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Succeeded:".bold(),
            report.succeeded().to_string().green()
        ));

        let failed = report.failed().to_string();
        let failed = if report.failed() > 0 {
            failed.red()
        } else {
            failed.normal()
        };
        output.push_str(&format!("{} {}\n", "Failed:".bold(), failed));

        for (kind, count) in report.failures_by_kind() {
            output.push_str(&format!("  {} {}\n", format!("{}:", kind).dimmed(), count));
        }

        output.push_str(&format!(
            "{} {} -> {}\n",
            "Image urls:".bold(),
            report.total().to_string().yellow().bold(),
            output_path.display()
        ));

        output
    }
}
