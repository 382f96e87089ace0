//! Common test utilities and helpers for golfstat tests

use chrono::{DateTime, TimeZone, Utc};
use golfstat::types::{LaunchMetrics, Lie, Shot};

/// Lie names that appear in real exports
#[allow(dead_code)]
pub const TEST_LIES: &[&str] = &["tee", "fairway", "rough", "deeprough", "sand", "green"];

/// Builder for creating test Shot instances
pub struct ShotBuilder {
    timestamp: Option<DateTime<Utc>>,
    starting_lie: Lie,
    finishing_lie: Lie,
    carry_yards: f64,
    total_yards: f64,
    finish_to_pin_meters: f64,
    gimme: bool,
    hole: Option<String>,
    course: Option<String>,
}

#[allow(dead_code)]
impl ShotBuilder {
    /// Create a new builder with default values: a fairway-finish drive
    pub fn new() -> Self {
        Self {
            timestamp: Some(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()),
            starting_lie: Lie::Tee,
            finishing_lie: Lie::Fairway,
            carry_yards: 250.0,
            total_yards: 270.0,
            finish_to_pin_meters: 120.0,
            gimme: false,
            hole: Some("1".to_string()),
            course: Some("Pinehurst".to_string()),
        }
    }

    pub fn timestamp(mut self, ts: Option<DateTime<Utc>>) -> Self {
        self.timestamp = ts;
        self
    }

    pub fn on_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.timestamp = Some(Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap());
        self
    }

    pub fn starting_lie(mut self, lie: Lie) -> Self {
        self.starting_lie = lie;
        self
    }

    pub fn finishing_lie(mut self, lie: Lie) -> Self {
        self.finishing_lie = lie;
        self
    }

    pub fn carry(mut self, yards: f64) -> Self {
        self.carry_yards = yards;
        self
    }

    pub fn total(mut self, yards: f64) -> Self {
        self.total_yards = yards;
        self
    }

    pub fn finish_meters(mut self, meters: f64) -> Self {
        self.finish_to_pin_meters = meters;
        self
    }

    pub fn gimme(mut self, gimme: bool) -> Self {
        self.gimme = gimme;
        self
    }

    pub fn hole(mut self, hole: Option<&str>) -> Self {
        self.hole = hole.map(str::to_string);
        self
    }

    pub fn course(mut self, course: Option<&str>) -> Self {
        self.course = course.map(str::to_string);
        self
    }

    pub fn build(self) -> Shot {
        Shot {
            timestamp: self.timestamp,
            starting_lie: self.starting_lie,
            finishing_lie: self.finishing_lie,
            carry_yards: self.carry_yards,
            total_yards: self.total_yards,
            finish_to_pin_meters: self.finish_to_pin_meters,
            gimme: self.gimme,
            hole: self.hole,
            course: self.course,
            launch: LaunchMetrics::default(),
        }
    }
}

impl Default for ShotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A short putt, holed or not
#[allow(dead_code)]
pub fn putt(total_yards: f64, holed: bool) -> Shot {
    ShotBuilder::new()
        .starting_lie(Lie::Green)
        .finishing_lie(Lie::Green)
        .carry(0.0)
        .total(total_yards)
        .finish_meters(if holed { 0.0 } else { 0.5 })
        .build()
}
