//! Filtering module for shot rows
//!
//! Supports date ranges and course names so a report can be narrowed to a
//! single round or practice window before aggregation.
//!
//! # Examples
//!
//! ```
//! use golfstat::filters::ShotFilter;
//! use chrono::NaiveDate;
//!
//! // Only June 2025 rounds at one course
//! let filter = ShotFilter::new()
//!     .with_since(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
//!     .with_until(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
//!     .with_course("Pinehurst".to_string());
//! ```

use crate::types::Shot;
use chrono::NaiveDate;

/// Filter configuration for shots
///
/// All filters are optional and combine conjunctively. Shots without a
/// timestamp fail any date filter; shots without a course name fail any
/// course filter.
#[derive(Debug, Default, Clone)]
pub struct ShotFilter {
    /// Start date filter (inclusive)
    pub since_date: Option<NaiveDate>,
    /// End date filter (inclusive)
    pub until_date: Option<NaiveDate>,
    /// Course name filter, exact match
    pub course: Option<String>,
}

impl ShotFilter {
    /// Create a new filter with no restrictions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start date filter
    pub fn with_since(mut self, date: NaiveDate) -> Self {
        self.since_date = Some(date);
        self
    }

    /// Set the end date filter
    pub fn with_until(mut self, date: NaiveDate) -> Self {
        self.until_date = Some(date);
        self
    }

    /// Set the course filter
    pub fn with_course(mut self, course: String) -> Self {
        self.course = Some(course);
        self
    }

    /// Check if a shot passes the filter
    pub fn matches(&self, shot: &Shot) -> bool {
        if self.since_date.is_some() || self.until_date.is_some() {
            let Some(date) = shot.date() else {
                // Undated shots cannot satisfy a date window
                return false;
            };
            let shot_date = date.inner();

            if let Some(since) = &self.since_date {
                if shot_date < since {
                    return false;
                }
            }
            if let Some(until) = &self.until_date {
                if shot_date > until {
                    return false;
                }
            }
        }

        if let Some(course_filter) = &self.course {
            match &shot.course {
                Some(course) if course == course_filter => {}
                _ => return false,
            }
        }

        true
    }

    /// Filter a stream of shots
    ///
    /// Applies the configured filters to a stream of shot rows, passing
    /// errors through unchanged.
    pub async fn filter_stream<S>(
        self,
        stream: S,
    ) -> impl futures::Stream<Item = crate::error::Result<Shot>>
    where
        S: futures::Stream<Item = crate::error::Result<Shot>>,
    {
        use futures::StreamExt;

        stream.filter_map(move |result| {
            let filter = self.clone();
            async move {
                match result {
                    Ok(shot) => {
                        if filter.matches(&shot) {
                            Some(Ok(shot))
                        } else {
                            None
                        }
                    }
                    Err(e) => Some(Err(e)),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LaunchMetrics, Lie};
    use chrono::{TimeZone, Utc};

    fn shot_on(date: Option<(i32, u32, u32)>, course: Option<&str>) -> Shot {
        Shot {
            timestamp: date
                .map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()),
            starting_lie: Lie::Tee,
            finishing_lie: Lie::Fairway,
            carry_yards: 250.0,
            total_yards: 270.0,
            finish_to_pin_meters: 120.0,
            gimme: false,
            hole: Some("1".to_string()),
            course: course.map(str::to_string),
            launch: LaunchMetrics::default(),
        }
    }

    #[test]
    fn test_date_filter() {
        let filter = ShotFilter::new()
            .with_since(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .with_until(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());

        assert!(!filter.matches(&shot_on(Some((2025, 5, 31)), None)));
        assert!(filter.matches(&shot_on(Some((2025, 6, 1)), None)));
        assert!(filter.matches(&shot_on(Some((2025, 6, 15)), None)));
        assert!(!filter.matches(&shot_on(Some((2025, 7, 1)), None)));
    }

    #[test]
    fn test_undated_shots_fail_date_filters() {
        let filter = ShotFilter::new().with_since(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(!filter.matches(&shot_on(None, None)));

        // Without date filters, undated shots pass
        assert!(ShotFilter::new().matches(&shot_on(None, None)));
    }

    #[test]
    fn test_course_filter() {
        let filter = ShotFilter::new().with_course("Pinehurst".to_string());

        assert!(filter.matches(&shot_on(Some((2025, 6, 1)), Some("Pinehurst"))));
        assert!(!filter.matches(&shot_on(Some((2025, 6, 1)), Some("St Andrews"))));
        assert!(!filter.matches(&shot_on(Some((2025, 6, 1)), None)));
    }

    #[tokio::test]
    async fn test_filter_stream() {
        use futures::{stream, StreamExt};

        let shots = vec![
            shot_on(Some((2025, 6, 1)), None),
            shot_on(Some((2025, 7, 1)), None),
        ];
        let filter =
            ShotFilter::new().with_until(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());

        let filtered: Vec<_> = filter
            .filter_stream(stream::iter(shots.into_iter().map(Ok)))
            .await
            .collect()
            .await;

        assert_eq!(filtered.len(), 1);
    }
}
