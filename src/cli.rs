//! CLI interface for golfstat
//!
//! Defines the command-line interface using clap: one positional CSV path,
//! a report subcommand, and global flags for output format and filtering.
//!
//! # Example
//!
//! ```bash
//! # Full report for one export
//! golfstat shot-data.csv report
//!
//! # Strokes gained for June rounds at one course, as JSON
//! golfstat shot-data.csv summary --since 2025-06-01 --until 2025-06-30 \
//!     --course Pinehurst --json
//! ```

use crate::error::{GolfstatError, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Analyze golf shot data from exported launch-monitor CSV files
#[derive(Parser, Debug, Clone)]
#[command(name = "golfstat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the exported shot-data CSV
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Filter by start date (YYYY-MM-DD, inclusive)
    #[arg(long, global = true)]
    pub since: Option<String>,

    /// Filter by end date (YYYY-MM-DD, inclusive)
    #[arg(long, global = true)]
    pub until: Option<String>,

    /// Filter by course name (exact match)
    #[arg(long, short = 'c', global = true)]
    pub course: Option<String>,

    /// Suppress informational output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Report to run (defaults to summary)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available reports
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Strokes-gained summary by category
    Summary,
    /// Approach proximity by carry-distance band
    Proximity,
    /// Putt make-rate by distance band
    Putting,
    /// Finishing-lie percentages by starting lie
    Transitions,
    /// Shots per date with a running total
    Volume,
    /// Drive distances by hole
    Drives,
    /// Every report in one pass
    Report,
}

/// Parse a date filter argument
///
/// # Errors
///
/// Returns [`GolfstatError::InvalidDate`] for anything that is not a valid
/// `YYYY-MM-DD` date.
pub fn parse_date_filter(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| GolfstatError::InvalidDate(format!("{s} (expected YYYY-MM-DD)")))
}
