//! CLI for Profile Stats.
//!
//! Profiles the authenticated account's repositories and writes SVG charts
//! plus a Markdown section into a README.

use clap::Parser;
use profile_stats::{load_config, resolve_token, RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Profile Stats - Render repository, language, technology and activity charts into a README.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to the configuration file [default: profile-stats.toml, if present].
    #[arg(long)]
    config: Option<PathBuf>,

    /// Markdown document to update (overrides `readme-path`).
    #[arg(long)]
    readme: Option<PathBuf>,

    /// Directory for the SVG charts (overrides `assets-dir`).
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Print the generated section instead of writing files.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // octocrab's TLS stack needs a process-wide crypto provider.
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A TLS crypto provider was already installed");
    }

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let token = resolve_token(args.token)?;

    let mut profile = load_config(args.config.as_deref())?;
    if let Some(readme) = args.readme {
        profile.readme_path = readme;
    }
    if let Some(assets_dir) = args.assets_dir {
        profile.assets_dir = assets_dir;
    }

    let runner = Runner::new(RunnerConfig::new(token, profile, args.dry_run))?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Status: {}",
        if summary.all_success() { "complete" } else { "partial" }
    );
    println!("  Repositories processed: {}", summary.repositories_processed);
    println!("  Languages: {}", summary.languages_found);
    println!("  Platforms: {}", summary.platforms_found);
    println!("  Databases: {}", summary.databases_found);
    println!("  Months of activity: {}", summary.active_months);
    println!(
        "  Activity: {} summary, {} full scan, {} unavailable",
        summary.activity_fast, summary.activity_fallback, summary.activity_unavailable
    );

    if summary.has_failures() {
        println!("  Language lookups failed: {}", summary.language_failures);
        println!("  Manifest fetches failed: {}", summary.manifest_failures);
    }

    if !summary.dry_run {
        println!("  Charts written: {}", summary.charts_written);
        println!(
            "  Document: {}",
            if summary.document_updated { "updated" } else { "unchanged" }
        );
    }
}
