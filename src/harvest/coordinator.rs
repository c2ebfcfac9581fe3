//! Harvest coordinator - main run orchestration logic
//!
//! A run is a single linear pass:
//! 1. Prepare the output directory
//! 2. Collect links from the listing page
//! 3. Derive a local file name for each link
//! 4. Download and write each link in turn
//! 5. Report totals

use crate::config::Config;
use crate::harvest::collector::collect_links;
use crate::harvest::fetcher::{build_http_client, fetch_file, FetchOutcome};
use crate::harvest::writer::{prepare_output_dir, write_file, WriteOutcome};
use crate::output::{LinkReport, LinkStatus, RunSummary};
use crate::url::local_filename;
use crate::{HarvestError, UrlResult};
use chrono::Utc;
use reqwest::Client;
use std::path::Path;
use std::time::Instant;

/// A link paired with the local file name it would be saved under
#[derive(Debug)]
pub struct PlannedDownload {
    pub link: String,
    pub filename: UrlResult<String>,
}

/// Main harvest coordinator
pub struct Harvester {
    config: Config,
    client: Client,
}

impl Harvester {
    /// Creates a new harvester with its HTTP client
    ///
    /// # Arguments
    ///
    /// * `config` - The harvester configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to run
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.http)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Collects the matching links from a listing page
    pub async fn collect(&self, listing_url: &str, contains: &str) -> Result<Vec<String>, HarvestError> {
        collect_links(
            &self.client,
            listing_url,
            contains,
            self.config.harvest.prefix.as_deref(),
            self.config.http.listing_timeout(),
        )
        .await
    }

    /// Collects links and pairs each with its local file name, downloading nothing
    pub async fn plan(
        &self,
        listing_url: &str,
        contains: &str,
    ) -> Result<Vec<PlannedDownload>, HarvestError> {
        let links = self.collect(listing_url, contains).await?;

        Ok(links
            .into_iter()
            .map(|link| {
                let filename = local_filename(&link);
                PlannedDownload { link, filename }
            })
            .collect())
    }

    /// Runs a complete harvest
    ///
    /// Only setup failures (unusable output directory, listing page failure)
    /// return an error. Per-link failures are recorded in the summary.
    ///
    /// # Arguments
    ///
    /// * `listing_url` - URL of the listing page
    /// * `contains` - Substring a link must contain to be downloaded
    /// * `out_dir` - Directory the files are written into
    pub async fn run(
        &self,
        listing_url: &str,
        contains: &str,
        out_dir: &Path,
    ) -> Result<RunSummary, HarvestError> {
        prepare_output_dir(out_dir).await?;

        let started_at = Utc::now();
        let start_time = Instant::now();

        let planned = self.plan(listing_url, contains).await?;
        let total = planned.len();

        let mut reports = Vec::with_capacity(total);
        for (index, download) in planned.into_iter().enumerate() {
            tracing::debug!("[{}/{}] {}", index + 1, total, download.link);
            reports.push(self.process_link(download, out_dir).await);
        }

        let summary = RunSummary::new(started_at, start_time.elapsed(), reports);
        tracing::info!(
            "Harvest completed: {} of {} links saved in {:?}",
            summary.succeeded(),
            summary.total(),
            summary.elapsed
        );

        Ok(summary)
    }

    /// Downloads and writes a single link
    async fn process_link(&self, download: PlannedDownload, out_dir: &Path) -> LinkReport {
        let PlannedDownload { link, filename } = download;

        let filename = match filename {
            Ok(filename) => filename,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", link, e);
                return LinkReport {
                    link,
                    filename: None,
                    status: LinkStatus::InvalidFilename(e.to_string()),
                };
            }
        };

        let bytes = match fetch_file(&self.client, &link, self.config.http.download_timeout()).await
        {
            FetchOutcome::Fetched {
                url,
                final_url,
                bytes,
                ..
            } => {
                if final_url != url {
                    tracing::debug!("{} redirected to {}", url, final_url);
                }
                bytes
            }
            failed => {
                return LinkReport {
                    link,
                    filename: Some(filename),
                    status: LinkStatus::FetchFailed(failed.to_string()),
                };
            }
        };

        let outcome = write_file(&bytes, &out_dir.join(&filename)).await;
        tracing::info!("{}", outcome);

        let status = match outcome {
            WriteOutcome::Written { path, bytes } => LinkStatus::Saved { path, bytes },
            WriteOutcome::Failed { path, error } => {
                LinkStatus::WriteFailed(format!("{}: {}", path.display(), error))
            }
        };

        LinkReport {
            link,
            filename: Some(filename),
            status,
        }
    }
}
