//! Data loader module for parsing exported shot-data CSV files
//!
//! The loader reads one delimited UTF-8 file (an optional byte-order mark
//! is tolerated) and streams typed [`Shot`] rows out of it. Rows that fail
//! to parse one or more required fields are logged and dropped; they never
//! abort the load. An input that yields zero usable rows is the one fatal
//! condition, reported as [`GolfstatError::EmptyInput`].
//!
//! # Examples
//!
//! ```no_run
//! use golfstat::data_loader::DataLoader;
//!
//! # async fn example() -> golfstat::Result<()> {
//! let loader = DataLoader::new("shot-data.csv");
//! let shots = loader.load_all().await?;
//! println!("Loaded {} shots", shots.len());
//! # Ok(())
//! # }
//! ```

use crate::error::{GolfstatError, Result};
use crate::types::{LaunchMetrics, Lie, Shot};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use futures::stream::{Stream, StreamExt};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One raw CSV row, field names matching the export headers
#[derive(Debug, Deserialize)]
struct RawShotRecord {
    #[serde(rename = "Timestamp")]
    timestamp: Option<String>,
    #[serde(rename = "Starting Lie")]
    starting_lie: String,
    #[serde(rename = "Finishing Lie")]
    finishing_lie: String,
    #[serde(rename = "Carry (yd)")]
    carry_yards: f64,
    #[serde(rename = "Total Distance (yd)")]
    total_yards: f64,
    #[serde(rename = "Finish Distance To Pin")]
    finish_to_pin_meters: f64,
    #[serde(rename = "Gimme")]
    gimme: f64,
    #[serde(rename = "Hole")]
    hole: Option<String>,
    #[serde(rename = "Course")]
    course: Option<String>,
    #[serde(rename = "HLA (deg)")]
    hla_deg: Option<f64>,
    #[serde(rename = "VLA (deg)")]
    vla_deg: Option<f64>,
    #[serde(rename = "Spin Axis (deg)")]
    spin_axis_deg: Option<f64>,
    #[serde(rename = "Ballspeed (mph)")]
    ball_speed_mph: Option<f64>,
}

impl RawShotRecord {
    /// Convert a raw row into a typed Shot, rejecting out-of-domain values
    fn into_shot(self) -> std::result::Result<Shot, String> {
        if self.carry_yards < 0.0 || self.carry_yards.is_nan() {
            return Err(format!("negative or invalid carry: {}", self.carry_yards));
        }
        if self.total_yards < 0.0 || self.total_yards.is_nan() {
            return Err(format!(
                "negative or invalid total distance: {}",
                self.total_yards
            ));
        }
        if self.finish_to_pin_meters < 0.0 || self.finish_to_pin_meters.is_nan() {
            return Err(format!(
                "negative or invalid finish distance: {}",
                self.finish_to_pin_meters
            ));
        }

        // Lie parsing never fails; unknown names become Lie::Unrecognized.
        // An unparseable timestamp leaves the shot undated, not dropped.
        Ok(Shot {
            timestamp: self.timestamp.as_deref().and_then(parse_timestamp),
            starting_lie: Lie::from(self.starting_lie.as_str()),
            finishing_lie: Lie::from(self.finishing_lie.as_str()),
            carry_yards: self.carry_yards,
            total_yards: self.total_yards,
            finish_to_pin_meters: self.finish_to_pin_meters,
            gimme: self.gimme != 0.0,
            hole: self.hole.filter(|h| !h.is_empty()),
            course: self.course.filter(|c| !c.is_empty()),
            launch: LaunchMetrics {
                ball_speed_mph: self.ball_speed_mph,
                vla_deg: self.vla_deg,
                hla_deg: self.hla_deg,
                spin_axis_deg: self.spin_axis_deg,
            },
        })
    }
}

/// Parse a source timestamp leniently
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD`. Anything
/// else is treated as missing.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Loader for one exported shot-data file
pub struct DataLoader {
    path: PathBuf,
}

impl DataLoader {
    /// Create a new DataLoader for the given CSV file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file being loaded
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load shots as an async stream
    ///
    /// Malformed rows are skipped with a warning. IO failures surface as a
    /// single `Err` item and end the stream.
    pub fn load_shots(&self) -> impl Stream<Item = Result<Shot>> + '_ {
        async_stream::stream! {
            let raw = match tokio::fs::read_to_string(&self.path).await {
                Ok(contents) => contents,
                Err(e) => {
                    yield Err(e.into());
                    return;
                }
            };

            // Exports from some tools carry a UTF-8 BOM
            let text = raw.strip_prefix('\u{feff}').unwrap_or(raw.as_str());

            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(text.as_bytes());

            for (index, row) in reader.deserialize::<RawShotRecord>().enumerate() {
                // Header occupies line 1
                let line = index + 2;
                match row {
                    Ok(record) => match record.into_shot() {
                        Ok(shot) => yield Ok(shot),
                        Err(reason) => {
                            warn!("Dropping row {} in {}: {}", line, self.path.display(), reason);
                        }
                    },
                    Err(e) => {
                        warn!("Dropping row {} in {}: {}", line, self.path.display(), e);
                    }
                }
            }
        }
    }

    /// Load every usable shot into memory
    ///
    /// # Errors
    ///
    /// Returns [`GolfstatError::EmptyInput`] when no rows survive parsing.
    pub async fn load_all(&self) -> Result<Vec<Shot>> {
        let stream = self.load_shots();
        let shots = collect_shots(stream).await?;
        debug!("Loaded {} shots from {}", shots.len(), self.path.display());
        Ok(shots)
    }
}

/// Collect a shot stream into memory, enforcing the empty-input check
pub async fn collect_shots<S>(stream: S) -> Result<Vec<Shot>>
where
    S: Stream<Item = Result<Shot>>,
{
    tokio::pin!(stream);
    let mut shots = Vec::new();
    while let Some(row) = stream.next().await {
        shots.push(row?);
    }
    if shots.is_empty() {
        return Err(GolfstatError::EmptyInput);
    }
    Ok(shots)
}
