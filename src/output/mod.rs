//! Output module for reporting harvest results
//!
//! This module handles:
//! - Recording what happened to every collected link
//! - Deriving run totals (succeeded, failed, bytes written)
//! - Printing the end-of-run summary

pub mod summary;

pub use summary::{print_summary, LinkReport, LinkStatus, RunSummary};
