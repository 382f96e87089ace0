//! Aggregation module for summarizing shot data
//!
//! Every summary table is computed as a pure function of an immutable shot
//! slice: category-level strokes gained, approach proximity by distance
//! band, putting make-rate by distance band, finishing-lie transition
//! percentages, cumulative shot volume, and per-hole drive distances.
//! Nothing here can fail; empty filtered subsets degrade to empty tables.
//!
//! # Examples
//!
//! ```no_run
//! use golfstat::{aggregation::{Aggregator, Totals}, data_loader::DataLoader};
//!
//! # async fn example() -> golfstat::Result<()> {
//! let shots = DataLoader::new("shot-data.csv").load_all().await?;
//! let aggregator = Aggregator::new();
//!
//! let categories = aggregator.aggregate_categories(&shots);
//! let totals = Totals::from_categories(&categories);
//! println!("Total strokes gained: {:+.2}", totals.strokes_gained);
//! # Ok(())
//! # }
//! ```

use crate::scoring::{categorize, meters_to_feet, strokes_taken};
use crate::types::{Category, Lie, Shot, ShotDate};
use std::collections::{BTreeMap, BTreeSet};

/// Band boundaries for approach proximity, in carry yards; the last band
/// is open-ended
pub const APPROACH_BAND_BOUNDS_YD: [f64; 9] =
    [50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0];

/// Band boundaries for putting make-rate, in total-distance yards; putts
/// of 50 yards or more fall outside every band
pub const PUTTING_BAND_BOUNDS_YD: [f64; 8] = [0.0, 3.0, 6.0, 10.0, 15.0, 20.0, 30.0, 50.0];

/// A half-open distance interval `[lower, upper)`
///
/// `upper == None` marks the open-ended final band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceBand {
    /// Inclusive lower bound in yards
    pub lower: f64,
    /// Exclusive upper bound in yards, or None for the open-ended band
    pub upper: Option<f64>,
}

impl DistanceBand {
    /// Whether a distance falls inside this band
    pub fn contains(&self, yards: f64) -> bool {
        yards >= self.lower && self.upper.is_none_or(|hi| yards < hi)
    }

    /// Human-readable band label, e.g. "100-125" or "250+"
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{:.0}-{:.0}", self.lower, upper),
            None => format!("{:.0}+", self.lower),
        }
    }
}

/// The nine approach bands, last one open-ended
pub fn approach_bands() -> Vec<DistanceBand> {
    let mut bands: Vec<DistanceBand> = APPROACH_BAND_BOUNDS_YD
        .windows(2)
        .map(|w| DistanceBand {
            lower: w[0],
            upper: Some(w[1]),
        })
        .collect();
    bands.push(DistanceBand {
        lower: *APPROACH_BAND_BOUNDS_YD.last().unwrap(),
        upper: None,
    });
    bands
}

/// The seven putting bands, all bounded
pub fn putting_bands() -> Vec<DistanceBand> {
    PUTTING_BAND_BOUNDS_YD
        .windows(2)
        .map(|w| DistanceBand {
            lower: w[0],
            upper: Some(w[1]),
        })
        .collect()
}

/// Strokes-gained summary for one category
///
/// Always produced for all five categories, zero-filled when empty, so the
/// report shape is stable regardless of the data.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// The category this row summarizes
    pub category: Category,
    /// Number of shots in the category
    pub shot_count: usize,
    /// Sum of per-shot strokes-taken estimates
    pub strokes_taken_sum: f64,
    /// shot_count times the category baseline
    pub baseline_strokes: f64,
    /// baseline_strokes minus strokes_taken_sum
    pub strokes_gained: f64,
    /// strokes_gained averaged over the shots (0 for empty categories)
    pub strokes_gained_per_shot: f64,
}

/// Grand totals across the category summary
///
/// Only the four scored categories contribute to `strokes_gained`;
/// `Other` is excluded by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    /// Shots across all five categories
    pub shot_count: usize,
    /// Strokes gained across Driving, Approach, Short Game and Putting
    pub strokes_gained: f64,
}

impl Totals {
    /// Build totals from a category summary
    pub fn from_categories(summaries: &[CategorySummary]) -> Self {
        let mut totals = Totals::default();
        for summary in summaries {
            totals.shot_count += summary.shot_count;
            if Category::SCORED.contains(&summary.category) {
                totals.strokes_gained += summary.strokes_gained;
            }
        }
        totals
    }
}

/// Mean approach proximity for one distance band
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityBand {
    /// Position of this band within [`approach_bands`]
    pub band_index: usize,
    /// The carry-distance interval
    pub band: DistanceBand,
    /// Shots in the band
    pub shots: usize,
    /// Mean finish distance to the pin, in feet
    pub mean_finish_ft: f64,
}

/// One carry band's proximity split across starting lies
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityLieRow {
    /// Position of this band within [`approach_bands`]
    pub band_index: usize,
    /// The carry-distance interval
    pub band: DistanceBand,
    /// Shots per lie, aligned with [`ProximityByLie::lies`]
    pub shots: Vec<usize>,
    /// Mean finish distance in feet per lie; None where the cell is empty
    pub mean_finish_ft: Vec<Option<f64>>,
}

/// Carry band by starting lie pivot of approach proximity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProximityByLie {
    /// Approach lies observed in the data, in canonical order
    pub lies: Vec<Lie>,
    /// One row per non-empty carry band
    pub rows: Vec<ProximityLieRow>,
}

/// Make-rate for one putting distance band
#[derive(Debug, Clone, PartialEq)]
pub struct PuttingBand {
    /// Position of this band within [`putting_bands`]
    pub band_index: usize,
    /// The total-distance interval
    pub band: DistanceBand,
    /// Putts holed
    pub made: usize,
    /// Putts attempted
    pub attempts: usize,
    /// 100 * made / attempts
    pub make_pct: f64,
}

/// One row of the finishing-lie transition matrix
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRow {
    /// Starting lie for this row
    pub starting: Lie,
    /// Shots from this starting lie
    pub shots: usize,
    /// Percentage ending on each finishing lie, aligned with
    /// [`TransitionMatrix::finishing`]; sums to 100 for non-empty rows
    pub pct: Vec<f64>,
}

/// Starting-lie by finishing-lie crosstab, row-normalized to percentages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionMatrix {
    /// Finishing lies observed in the data, in canonical order
    pub finishing: Vec<Lie>,
    /// One row per observed starting lie, in canonical order
    pub rows: Vec<TransitionRow>,
}

/// Shot volume for one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct VolumePoint {
    /// The date
    pub date: ShotDate,
    /// Shots struck on this date
    pub shots: usize,
    /// Running total of shots up to and including this date
    pub cumulative: usize,
}

/// Drive distance summary for one hole
#[derive(Debug, Clone, PartialEq)]
pub struct DriveSummary {
    /// Hole identifier
    pub hole: String,
    /// Tee shots recorded on this hole
    pub drives: usize,
    /// Mean carry distance in yards
    pub mean_carry_yards: f64,
    /// Mean total distance in yards
    pub mean_total_yards: f64,
    /// Longest total distance in yards
    pub longest_yards: f64,
}

/// Everything the dashboard shows for one loaded file
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Category-level strokes gained
    pub categories: Vec<CategorySummary>,
    /// Grand totals
    pub totals: Totals,
    /// Approach proximity by band
    pub proximity: Vec<ProximityBand>,
    /// Approach proximity split by starting lie
    pub proximity_by_lie: ProximityByLie,
    /// Putting make-rate by band
    pub putting: Vec<PuttingBand>,
    /// Finishing-lie transitions
    pub transitions: TransitionMatrix,
    /// Cumulative shot volume
    pub volume: Vec<VolumePoint>,
    /// Per-hole drive distances
    pub drives: Vec<DriveSummary>,
}

/// Accumulator for one category
#[derive(Default)]
struct CategoryAccumulator {
    shots: usize,
    strokes: f64,
}

impl CategoryAccumulator {
    fn add(&mut self, shot: &Shot) {
        self.shots += 1;
        self.strokes += strokes_taken(shot);
    }

    fn into_summary(self, category: Category) -> CategorySummary {
        let baseline_strokes = self.shots as f64 * category.baseline();
        let strokes_gained = baseline_strokes - self.strokes;
        // Zero-count categories divide by 1 and report 0 gained per shot
        let strokes_gained_per_shot = strokes_gained / (self.shots.max(1) as f64);
        CategorySummary {
            category,
            shot_count: self.shots,
            strokes_taken_sum: self.strokes,
            baseline_strokes,
            strokes_gained,
            strokes_gained_per_shot,
        }
    }
}

/// Accumulator for one hole's drives
#[derive(Default)]
struct DriveAccumulator {
    drives: usize,
    carry_sum: f64,
    total_sum: f64,
    longest: f64,
}

impl DriveAccumulator {
    fn add(&mut self, shot: &Shot) {
        self.drives += 1;
        self.carry_sum += shot.carry_yards;
        self.total_sum += shot.total_yards;
        if shot.total_yards > self.longest {
            self.longest = shot.total_yards;
        }
    }

    fn into_summary(self, hole: String) -> DriveSummary {
        let n = self.drives.max(1) as f64;
        DriveSummary {
            hole,
            drives: self.drives,
            mean_carry_yards: self.carry_sum / n,
            mean_total_yards: self.total_sum / n,
            longest_yards: self.longest,
        }
    }
}

/// Main aggregation engine
///
/// Stateless; each method is independent and reads only the shot slice it
/// is given, so tables can be computed and tested in isolation.
#[derive(Debug, Default)]
pub struct Aggregator;

impl Aggregator {
    /// Create a new Aggregator
    pub fn new() -> Self {
        Self
    }

    /// Build the five-row category summary
    ///
    /// Every category appears exactly once, in canonical order, even when
    /// it has no shots.
    pub fn aggregate_categories(&self, shots: &[Shot]) -> Vec<CategorySummary> {
        let mut accumulators: [CategoryAccumulator; 5] = Default::default();

        for shot in shots {
            accumulators[categorize(shot) as usize].add(shot);
        }

        accumulators
            .into_iter()
            .zip(Category::ALL)
            .map(|(acc, category)| acc.into_summary(category))
            .collect()
    }

    /// Mean proximity to the pin by approach carry band
    ///
    /// Approach shots start on fairway, rough, deeprough or sand with a
    /// carry over 50 yards. Only non-empty bands are returned.
    pub fn aggregate_proximity(&self, shots: &[Shot]) -> Vec<ProximityBand> {
        let bands = approach_bands();
        let mut counts = vec![0usize; bands.len()];
        let mut finish_sums = vec![0.0f64; bands.len()];

        for shot in shots {
            if categorize(shot) != Category::Approach {
                continue;
            }
            if let Some(i) = bands.iter().position(|b| b.contains(shot.carry_yards)) {
                counts[i] += 1;
                finish_sums[i] += shot.finish_to_pin_meters;
            }
        }

        bands
            .into_iter()
            .enumerate()
            .filter(|(i, _)| counts[*i] > 0)
            .map(|(i, band)| ProximityBand {
                band_index: i,
                band,
                shots: counts[i],
                mean_finish_ft: meters_to_feet(finish_sums[i] / counts[i] as f64),
            })
            .collect()
    }

    /// Pivot approach proximity by carry band and starting lie
    ///
    /// Same shot selection as [`Self::aggregate_proximity`], split out per
    /// starting lie. Only lies and bands with at least one shot appear;
    /// empty cells within a kept row are None.
    pub fn aggregate_proximity_by_lie(&self, shots: &[Shot]) -> ProximityByLie {
        let bands = approach_bands();
        let mut observed: BTreeSet<Lie> = BTreeSet::new();
        let mut cells: BTreeMap<(usize, Lie), (usize, f64)> = BTreeMap::new();

        for shot in shots {
            if categorize(shot) != Category::Approach {
                continue;
            }
            if let Some(i) = bands.iter().position(|b| b.contains(shot.carry_yards)) {
                observed.insert(shot.starting_lie.clone());
                let cell = cells.entry((i, shot.starting_lie.clone())).or_insert((0, 0.0));
                cell.0 += 1;
                cell.1 += shot.finish_to_pin_meters;
            }
        }

        let lies: Vec<Lie> = observed.into_iter().collect();
        let rows = bands
            .into_iter()
            .enumerate()
            .filter_map(|(i, band)| {
                let shots: Vec<usize> = lies
                    .iter()
                    .map(|lie| cells.get(&(i, lie.clone())).map_or(0, |cell| cell.0))
                    .collect();
                if shots.iter().all(|&n| n == 0) {
                    return None;
                }
                let mean_finish_ft = lies
                    .iter()
                    .map(|lie| {
                        cells
                            .get(&(i, lie.clone()))
                            .map(|(n, sum)| meters_to_feet(sum / *n as f64))
                    })
                    .collect();
                Some(ProximityLieRow {
                    band_index: i,
                    band,
                    shots,
                    mean_finish_ft,
                })
            })
            .collect();

        ProximityByLie { lies, rows }
    }

    /// Putt make-rate by total-distance band
    ///
    /// Considers green starts that were not conceded. Putts of 50 yards or
    /// more fall outside every band and are dropped. Only non-empty bands
    /// are returned.
    pub fn aggregate_putting(&self, shots: &[Shot]) -> Vec<PuttingBand> {
        let bands = putting_bands();
        let mut attempts = vec![0usize; bands.len()];
        let mut made = vec![0usize; bands.len()];

        for shot in shots {
            if categorize(shot) != Category::Putting {
                continue;
            }
            if let Some(i) = bands.iter().position(|b| b.contains(shot.total_yards)) {
                attempts[i] += 1;
                if shot.is_holed() {
                    made[i] += 1;
                }
            }
        }

        bands
            .into_iter()
            .enumerate()
            .filter(|(i, _)| attempts[*i] > 0)
            .map(|(i, band)| PuttingBand {
                band_index: i,
                band,
                made: made[i],
                attempts: attempts[i],
                make_pct: 100.0 * made[i] as f64 / attempts[i] as f64,
            })
            .collect()
    }

    /// Cross-tabulate starting lie against finishing lie
    ///
    /// Each row is normalized so its percentages sum to 100.
    pub fn aggregate_transitions(&self, shots: &[Shot]) -> TransitionMatrix {
        let mut finishing_lies: BTreeSet<Lie> = BTreeSet::new();
        let mut counts: BTreeMap<Lie, BTreeMap<Lie, usize>> = BTreeMap::new();

        for shot in shots {
            finishing_lies.insert(shot.finishing_lie.clone());
            *counts
                .entry(shot.starting_lie.clone())
                .or_default()
                .entry(shot.finishing_lie.clone())
                .or_default() += 1;
        }

        let finishing: Vec<Lie> = finishing_lies.into_iter().collect();
        let rows = counts
            .into_iter()
            .map(|(starting, row_counts)| {
                let total: usize = row_counts.values().sum();
                let pct = finishing
                    .iter()
                    .map(|lie| {
                        100.0 * row_counts.get(lie).copied().unwrap_or(0) as f64 / total as f64
                    })
                    .collect();
                TransitionRow {
                    starting,
                    shots: total,
                    pct,
                }
            })
            .collect();

        TransitionMatrix { finishing, rows }
    }

    /// Shots per calendar date with a running cumulative sum
    ///
    /// Undated shots are excluded. Output is chronological, so the
    /// cumulative series is monotonically non-decreasing.
    pub fn aggregate_volume(&self, shots: &[Shot]) -> Vec<VolumePoint> {
        let mut per_date: BTreeMap<ShotDate, usize> = BTreeMap::new();
        for shot in shots {
            if let Some(date) = shot.date() {
                *per_date.entry(date).or_default() += 1;
            }
        }

        let mut cumulative = 0usize;
        per_date
            .into_iter()
            .map(|(date, count)| {
                cumulative += count;
                VolumePoint {
                    date,
                    shots: count,
                    cumulative,
                }
            })
            .collect()
    }

    /// Drive distances grouped by hole
    ///
    /// Tee shots without a hole identifier cannot be grouped and are
    /// skipped. Holes sort numerically when their identifiers parse as
    /// numbers, lexically otherwise.
    pub fn aggregate_drives(&self, shots: &[Shot]) -> Vec<DriveSummary> {
        let mut per_hole: BTreeMap<String, DriveAccumulator> = BTreeMap::new();

        for shot in shots {
            if shot.starting_lie != Lie::Tee {
                continue;
            }
            let Some(hole) = &shot.hole else {
                continue;
            };
            per_hole.entry(hole.clone()).or_default().add(shot);
        }

        let mut summaries: Vec<DriveSummary> = per_hole
            .into_iter()
            .map(|(hole, acc)| acc.into_summary(hole))
            .collect();
        summaries.sort_by_key(|s| match s.hole.parse::<u32>() {
            Ok(n) => (0u8, n, String::new()),
            Err(_) => (1u8, 0, s.hole.clone()),
        });
        summaries
    }

    /// Compute every summary table for one loaded file
    pub fn build_report(&self, shots: &[Shot]) -> SessionReport {
        let categories = self.aggregate_categories(shots);
        let totals = Totals::from_categories(&categories);
        SessionReport {
            totals,
            categories,
            proximity: self.aggregate_proximity(shots),
            proximity_by_lie: self.aggregate_proximity_by_lie(shots),
            putting: self.aggregate_putting(shots),
            transitions: self.aggregate_transitions(shots),
            volume: self.aggregate_volume(shots),
            drives: self.aggregate_drives(shots),
        }
    }
}
