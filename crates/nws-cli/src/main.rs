//! # nws CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nws_cli::build::run_build;
use nws_cli::history::GitHistory;
use nws_cli::site::SiteLayout;
use nws_cli::validate::run_validate;
use nws_render::SiteChrome;

/// Narrow-width shoes site tool.
///
/// Validates retailer entries against the site schema and builds the
/// listing page.
#[derive(Parser, Debug)]
#[command(name = "nws", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate entries, then write index.html.
    Build,

    /// Check every entry against schema.yml and report all violations.
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let layout = SiteLayout::discover(&cwd).unwrap_or_else(|| {
        tracing::warn!("could not locate site root; using current directory");
        SiteLayout::new(&cwd)
    });

    tracing::debug!(root = %layout.root.display(), "resolved site root");

    let result = match cli.command {
        Commands::Build => {
            let history = GitHistory::new(&layout.root);
            run_build(&layout, &SiteChrome::default(), &history).map(|summary| {
                println!(
                    "Wrote {} ({} entries, {} bytes)",
                    layout.relative(&summary.output).display(),
                    summary.entries,
                    summary.bytes
                );
                0
            })
        }
        Commands::Validate => run_validate(&layout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
