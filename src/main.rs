//! Janus - Admin Panel Discovery Scanner CLI

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::error;
use tracing_subscriber::EnvFilter;

use janus::models::ScanConfig;
use janus::{config, report, scanner, update};

/// Admin panel discovery scanner
#[derive(Parser)]
#[command(name = "janus", version, about, long_about = None)]
struct Cli {
    /// Target website URL (e.g. https://example.com)
    #[arg(short, long, required_unless_present = "check_updates")]
    target: Option<String>,

    /// Number of concurrent workers
    #[arg(long, alias = "th")]
    threads: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to the wordlist of candidate paths
    #[arg(short, long)]
    paths: Option<String>,

    /// File to save results to
    #[arg(short, long)]
    output: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Check for a newer release and exit
    #[arg(long, alias = "cu")]
    check_updates: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_banner() {
    let banner = r#"
    ╔═══════════════════════════════════════╗
    ║  JANUS v0.1.0                         ║
    ║  Admin Panel Discovery Scanner        ║
    ╚═══════════════════════════════════════╝
    "#;
    println!("{}", banner.cyan());
}

fn build_config(cli: &Cli) -> Result<ScanConfig, janus::error::JanusError> {
    let mut scan_config = if let Some(ref path) = cli.config {
        config::load_config(path)?
    } else {
        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            config::load_config(default_path)?
        } else {
            ScanConfig::default()
        }
    };

    config::merge_cli_args(
        &mut scan_config,
        cli.target.clone().unwrap_or_default(),
        cli.threads,
        cli.timeout,
        cli.paths.clone(),
        cli.output.clone(),
    );

    Ok(scan_config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "janus=debug" } else { "janus=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    if cli.check_updates {
        if let Err(e) = update::check_for_updates().await {
            eprintln!("  {} {e}", "Update check failed:".red().bold());
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    print_banner();

    let scan_config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  {} {e}", "Error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    println!("  {} {}", "Target:".bold(), scan_config.target.green());
    println!(
        "  {} {}",
        "Threads:".bold(),
        scan_config.threads.to_string().cyan()
    );
    println!(
        "  {} {}\n",
        "Wordlist:".bold(),
        scan_config.wordlist_path.cyan()
    );

    update::check_connectivity(scan_config.timeout_secs).await;

    let cancel = CancellationToken::new();
    let cancel_on_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for ctrl+c: {e}");
            return;
        }
        println!("\n  {}", "Scan interrupted by user. Exiting...".yellow());
        cancel_on_signal.cancel();
    });

    let report = match scanner::run_scan(&scan_config, cancel).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("  {} {e}", "Error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    report::print_results(&report);

    // An interrupted scan never touches the result file; a completed
    // one writes it atomically. Persistence failure still exits zero
    // because the results were already shown above.
    if report.interrupted {
        return ExitCode::SUCCESS;
    }

    match report::write_results(&report, &scan_config.output_path) {
        Ok(()) => {
            println!(
                "\n  {} {}",
                "Results saved to:".bold(),
                scan_config.output_path.green()
            );
        }
        Err(e) => {
            eprintln!("  {} {e}", "Warning:".yellow().bold());
        }
    }

    ExitCode::SUCCESS
}
