//! golfstat - Analyze golf shot data from exported launch-monitor CSV files
//!
//! This library provides functionality to:
//! - Parse exported shot-data CSV files into typed shot rows
//! - Classify every shot into a strokes-gained category
//! - Aggregate shots into category, distance-band, transition, volume and
//!   drive summaries
//! - Generate reports in table and JSON formats
//!
//! # Examples
//!
//! ```no_run
//! use golfstat::{
//!     aggregation::{Aggregator, Totals},
//!     data_loader::DataLoader,
//!     output::get_formatter,
//! };
//!
//! #[tokio::main]
//! async fn main() -> golfstat::Result<()> {
//!     let shots = DataLoader::new("shot-data.csv").load_all().await?;
//!
//!     let aggregator = Aggregator::new();
//!     let categories = aggregator.aggregate_categories(&shots);
//!     let totals = Totals::from_categories(&categories);
//!
//!     let formatter = get_formatter(false);
//!     println!("{}", formatter.format_categories(&categories, &totals));
//!     Ok(())
//! }
//! ```

pub mod aggregation;
pub mod cli;
pub mod data_loader;
pub mod error;
pub mod filters;
pub mod output;
pub mod reference;
pub mod scoring;
pub mod types;

// Re-export commonly used types
pub use error::{GolfstatError, Result};
pub use types::{Category, LaunchMetrics, Lie, Shot, ShotDate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
