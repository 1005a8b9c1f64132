//! Result reporting: console display and file persistence

use crate::error::{JanusError, Result};
use crate::models::ScanReport;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Formats one result-file line for a match
fn format_line(url: &str, status: u16) -> String {
    format!("{url} | Status: {status}")
}

/// Prints the scan outcome to the console.
///
/// Console output happens regardless of whether persistence later
/// succeeds; the user always sees what was found.
pub fn print_results(report: &ScanReport) {
    if report.matches.is_empty() {
        println!("\n  {}", "No admin panels found.".yellow().bold());
    } else {
        println!("\n  {}", "Found admin panels:".green().bold());
        for m in &report.matches {
            println!(
                "    {}",
                format!("- {} (Status: {})", m.url, m.status).green()
            );
        }
    }

    print_summary(report);
}

fn print_summary(report: &ScanReport) {
    use tabled::builder::Builder;
    use tabled::settings::Style;

    println!("\n  {}", "Scan Summary".bold());
    println!("  {}", "─".repeat(35));

    let mut builder = Builder::default();
    builder.push_record(["Paths", report.paths_total.to_string().as_str()]);
    builder.push_record(["Requests", report.total_requests.to_string().as_str()]);
    builder.push_record(["Matches", report.matches.len().to_string().as_str()]);
    if let Some(duration) = report.duration() {
        let secs = duration.num_milliseconds() as f64 / 1000.0;
        builder.push_record(["Duration", format!("{secs:.1}s").as_str()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{table}");
}

/// Writes the result file: one line per match, completion order.
///
/// The file is written to a temporary sibling and renamed into place,
/// so an interrupt mid-write never leaves a partial file behind. An
/// existing file at the destination is overwritten. The parent
/// directory is created when missing.
pub fn write_results(report: &ScanReport, output_path: &str) -> Result<()> {
    let path = Path::new(output_path);
    let to_output_err = |source: std::io::Error| JanusError::OutputWrite {
        path: output_path.to_string(),
        source,
    };

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            info!("creating output directory {}", dir.display());
            std::fs::create_dir_all(dir).map_err(to_output_err)?;
        }
    }

    let mut contents = String::new();
    for m in &report.matches {
        contents.push_str(&format_line(&m.url, m.status));
        contents.push('\n');
    }

    let tmp = path.with_extension("txt.tmp");
    std::fs::write(&tmp, contents).map_err(to_output_err)?;
    std::fs::rename(&tmp, path).map_err(to_output_err)?;

    Ok(())
}
