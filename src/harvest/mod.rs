//! Harvest module: listing page to files on disk
//!
//! This module contains the whole pipeline:
//! - Listing page fetching and link collection
//! - HTML parsing and substring filtering
//! - Per-file downloads with tagged outcomes
//! - File writing and output directory setup
//! - Overall run coordination

mod collector;
mod coordinator;
mod fetcher;
mod parser;
mod writer;

pub use collector::{collect_links, fetch_listing};
pub use coordinator::{Harvester, PlannedDownload};
pub use fetcher::{build_http_client, fetch_file, FetchOutcome};
pub use parser::{extract_hrefs, extract_links, filter_links};
pub use writer::{prepare_output_dir, write_file, OutputDir, WriteOutcome};

use crate::config::Config;
use crate::output::RunSummary;
use crate::HarvestError;
use std::path::Path;

/// Runs a complete harvest with the given configuration
///
/// This is the main library entry point. It builds a [`Harvester`] and runs it
/// once.
///
/// # Returns
///
/// * `Ok(RunSummary)` - The run completed (individual links may have failed)
/// * `Err(HarvestError)` - Setup or the listing page failed
pub async fn harvest(
    config: Config,
    listing_url: &str,
    contains: &str,
    out_dir: &Path,
) -> Result<RunSummary, HarvestError> {
    Harvester::new(config)?
        .run(listing_url, contains, out_dir)
        .await
}
