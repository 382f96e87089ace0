//! Core domain types for golfstat
//!
//! This module contains the fundamental types used throughout the golfstat
//! library: the closed lie enumeration, shot categories with their strokes
//! baselines, calendar dates for volume grouping, and the `Shot` record
//! itself.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Surface a ball rests on before or after a shot
///
/// The exported CSV carries lie names as free strings. Everything outside
/// the known universe is preserved in the `Unrecognized` variant rather
/// than rejected, because classification deliberately falls through to
/// `Category::Other` for unknown surfaces.
///
/// # Examples
/// ```
/// use golfstat::types::Lie;
///
/// let lie: Lie = "deeprough".parse().unwrap();
/// assert_eq!(lie, Lie::DeepRough);
/// assert_eq!(lie.to_string(), "deeprough");
///
/// let odd: Lie = "cartpath".parse().unwrap();
/// assert_eq!(odd, Lie::Unrecognized("cartpath".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    DeepRough,
    Sand,
    Green,
    /// Any lie name outside the known universe, source spelling preserved
    Unrecognized(String),
}

impl Lie {
    /// Whether this lie can start an approach shot
    pub fn is_approach_surface(&self) -> bool {
        matches!(self, Lie::Fairway | Lie::Rough | Lie::DeepRough | Lie::Sand)
    }
}

impl FromStr for Lie {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "tee" => Lie::Tee,
            "fairway" => Lie::Fairway,
            "rough" => Lie::Rough,
            "deeprough" => Lie::DeepRough,
            "sand" => Lie::Sand,
            "green" => Lie::Green,
            _ => Lie::Unrecognized(s.trim().to_string()),
        })
    }
}

impl From<&str> for Lie {
    fn from(s: &str) -> Self {
        // FromStr is infallible, so this can never panic
        s.parse().unwrap_or_else(|never| match never {})
    }
}

impl fmt::Display for Lie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lie::Tee => write!(f, "tee"),
            Lie::Fairway => write!(f, "fairway"),
            Lie::Rough => write!(f, "rough"),
            Lie::DeepRough => write!(f, "deeprough"),
            Lie::Sand => write!(f, "sand"),
            Lie::Green => write!(f, "green"),
            Lie::Unrecognized(name) => write!(f, "{name}"),
        }
    }
}

/// Strokes-gained category assigned to every shot
///
/// Classification is a pure function of starting lie, carry distance and
/// the gimme flag; see [`crate::scoring::categorize`]. Every shot lands in
/// exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Driving,
    Approach,
    ShortGame,
    Putting,
    Other,
}

impl Category {
    /// All five categories in canonical display order
    pub const ALL: [Category; 5] = [
        Category::Driving,
        Category::Approach,
        Category::ShortGame,
        Category::Putting,
        Category::Other,
    ];

    /// The four categories that count towards total strokes gained
    ///
    /// `Other` collects conceded putts and unclassified shots and is
    /// excluded from the total.
    pub const SCORED: [Category; 4] = [
        Category::Driving,
        Category::Approach,
        Category::ShortGame,
        Category::Putting,
    ];

    /// Baseline strokes per shot for this category
    pub fn baseline(&self) -> f64 {
        match self {
            Category::Driving => 3.0,
            Category::Approach => 3.0,
            Category::ShortGame => 2.6,
            Category::Putting => 1.5,
            Category::Other => 3.0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Driving => write!(f, "Driving"),
            Category::Approach => write!(f, "Approach"),
            Category::ShortGame => write!(f, "Short Game"),
            Category::Putting => write!(f, "Putting"),
            Category::Other => write!(f, "Other"),
        }
    }
}

/// Calendar date used for volume grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShotDate(NaiveDate);

impl ShotDate {
    /// Create a new ShotDate
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the inner NaiveDate
    pub fn inner(&self) -> &NaiveDate {
        &self.0
    }

    /// Format with a chrono format string
    pub fn format(&self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

impl fmt::Display for ShotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Launch and shape metrics carried through from the source file
///
/// These are consumed by downstream presentation only; no aggregation in
/// this crate reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaunchMetrics {
    /// Ball speed in mph
    pub ball_speed_mph: Option<f64>,
    /// Vertical launch angle in degrees
    pub vla_deg: Option<f64>,
    /// Horizontal launch angle in degrees
    pub hla_deg: Option<f64>,
    /// Spin axis in degrees
    pub spin_axis_deg: Option<f64>,
}

/// One shot row from the exported file, immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    /// When the shot was struck; None when the source timestamp was
    /// missing or unparseable
    pub timestamp: Option<DateTime<Utc>>,
    /// Surface the ball started on
    pub starting_lie: Lie,
    /// Surface the ball ended on
    pub finishing_lie: Lie,
    /// Carry distance in yards
    pub carry_yards: f64,
    /// Total distance in yards
    pub total_yards: f64,
    /// Remaining distance to the pin in meters; 0 means holed
    pub finish_to_pin_meters: f64,
    /// Putt conceded rather than holed
    pub gimme: bool,
    /// Hole identifier, numeric or free text
    pub hole: Option<String>,
    /// Course name
    pub course: Option<String>,
    /// Pass-through launch metrics
    pub launch: LaunchMetrics,
}

impl Shot {
    /// Whether the shot ended in the hole
    pub fn is_holed(&self) -> bool {
        self.finish_to_pin_meters == 0.0
    }

    /// Calendar date of the shot, if it carries a timestamp
    pub fn date(&self) -> Option<ShotDate> {
        self.timestamp.map(|ts| ShotDate::new(ts.date_naive()))
    }
}
