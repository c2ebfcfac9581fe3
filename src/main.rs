//! Link-Harvester main entry point
//!
//! This is the command-line interface for the Link-Harvester downloader.

use anyhow::Context;
use clap::Parser;
use link_harvester::config::{apply_overrides, load_config, Config};
use link_harvester::output::print_summary;
use link_harvester::Harvester;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Link-Harvester: download every file a listing page links to
///
/// Fetches the listing page at URL, keeps the links containing CONTAINS, and
/// saves each one into OUT_DIRECTORY under the last segment of its path.
#[derive(Parser, Debug)]
#[command(name = "link-harvester")]
#[command(version)]
#[command(about = "Download the files a listing page links to", long_about = None)]
struct Cli {
    /// Listing page to retrieve links from
    #[arg(value_name = "URL")]
    url: String,

    /// Only links containing this string are downloaded
    #[arg(value_name = "CONTAINS")]
    contains: String,

    /// Directory to save downloaded files into
    #[arg(value_name = "OUT_DIRECTORY")]
    out_directory: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Prefix for relative links (defaults to the listing URL's scheme and host)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Per-download timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Show which links would be downloaded, and where, without downloading
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let harvester = Harvester::new(config).context("Failed to build HTTP client")?;
    tracing::debug!("Using configuration: {:?}", harvester.config());

    if cli.dry_run {
        handle_dry_run(&harvester, &cli).await
    } else {
        handle_harvest(&harvester, &cli).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_harvester=info,warn"),
            1 => EnvFilter::new("link_harvester=debug,info"),
            2 => EnvFilter::new("link_harvester=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the optional config file and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })?
        }
        None => Config::default(),
    };

    apply_overrides(config, cli.prefix.as_deref(), cli.timeout)
        .context("Invalid command-line override")
}

/// Handles the --dry-run mode: lists links and target paths
async fn handle_dry_run(harvester: &Harvester, cli: &Cli) -> anyhow::Result<()> {
    println!("=== Link-Harvester Dry Run ===\n");

    let planned = harvester
        .plan(&cli.url, &cli.contains)
        .await
        .with_context(|| format!("Failed to collect links from {}", cli.url))?;

    for download in &planned {
        match &download.filename {
            Ok(name) => println!("  {} -> {}", download.link, cli.out_directory.join(name).display()),
            Err(e) => println!("  {} -> (skipped: {})", download.link, e),
        }
    }

    println!("\n✓ Would attempt {} downloads", planned.len());
    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(harvester: &Harvester, cli: &Cli) -> anyhow::Result<()> {
    let summary = harvester
        .run(&cli.url, &cli.contains, &cli.out_directory)
        .await
        .with_context(|| format!("Harvest from {} failed", cli.url))?;

    print_summary(&summary);
    Ok(())
}
