//! Per-run summary and its console rendering

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// What happened to one collected link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// Downloaded and written to disk
    Saved { path: PathBuf, bytes: usize },

    /// The download failed; the link was not written
    FetchFailed(String),

    /// The download succeeded but the file could not be written
    WriteFailed(String),

    /// No safe local file name could be derived; nothing was requested
    InvalidFilename(String),
}

impl LinkStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    /// Failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Saved { .. } => None,
            Self::FetchFailed(reason)
            | Self::WriteFailed(reason)
            | Self::InvalidFilename(reason) => Some(reason),
        }
    }
}

/// Report for one collected link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    /// The absolute link
    pub link: String,

    /// Local file name, when one could be derived
    pub filename: Option<String>,

    pub status: LinkStatus,
}

/// Outcome of a complete harvest run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,

    /// Time from just after directory setup to the last link
    pub elapsed: Duration,

    /// One report per collected link, in collection order
    pub reports: Vec<LinkReport>,
}

impl RunSummary {
    pub fn new(started_at: DateTime<Utc>, elapsed: Duration, reports: Vec<LinkReport>) -> Self {
        Self {
            started_at,
            elapsed,
            reports,
        }
    }

    /// Number of links the collector returned
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// Number of files downloaded and written
    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.status.is_success()).count()
    }

    /// Always `total() - succeeded()`
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// Reports for links that were not saved
    pub fn failures(&self) -> impl Iterator<Item = &LinkReport> {
        self.reports.iter().filter(|r| !r.status.is_success())
    }

    /// Total bytes written to disk
    pub fn bytes_written(&self) -> usize {
        self.reports
            .iter()
            .map(|r| match &r.status {
                LinkStatus::Saved { bytes, .. } => *bytes,
                _ => 0,
            })
            .sum()
    }
}

/// Prints the run summary to stdout
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!(
        "{} downloads in {:.3} seconds ({} of {} links, {} bytes).",
        summary.succeeded(),
        summary.elapsed.as_secs_f64(),
        summary.succeeded(),
        summary.total(),
        summary.bytes_written()
    );
    println!(
        "Run started at {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
    println!("{} downloads failed.", summary.failed());

    if summary.failed() > 0 {
        for report in summary.failures() {
            println!(
                "  - {}: {}",
                report.link,
                report.status.reason().unwrap_or("unknown")
            );
        }
    }
}
