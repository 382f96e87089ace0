//! Shot classification and the strokes-taken model
//!
//! Two pure per-shot derivations feed every summary table:
//!
//! - [`categorize`] assigns each shot exactly one strokes-gained category
//!   based on starting lie, carry distance and the gimme flag.
//! - [`strokes_taken`] assigns each shot a real-valued cost: 1.0 for a
//!   holed shot, otherwise 1 plus a linear penalty proportional to the
//!   remaining distance to the pin.
//!
//! The penalty constants are a calibration heuristic (roughly 80 feet of
//! remaining distance adds one stroke), not a fitted strokes-gained model.
//! They are kept verbatim so summaries stay comparable with earlier
//! exports of the same data.

use crate::types::{Category, Lie, Shot};

/// Unit conversion used for all meter fields in the source file
pub const FEET_PER_METER: f64 = 3.28084;

/// Feet of remaining distance per penalty unit
pub const PENALTY_DIVISOR_FT: f64 = 8.0;

/// Strokes added per penalty unit
pub const PENALTY_SCALE: f64 = 0.1;

/// Carry threshold separating approach shots from the short game, in yards
pub const SHORT_GAME_MAX_CARRY_YD: f64 = 50.0;

/// Convert meters to feet
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Assign a strokes-gained category to a shot
///
/// Rules are evaluated in precedence order, first match wins:
///
/// 1. tee shots are `Driving`
/// 2. fairway/rough/deeprough/sand with carry over 50 yd is `Approach`
/// 3. carry of 50 yd or less off anything but tee or green is `Short Game`
/// 4. green without a gimme is `Putting`
/// 5. everything else, including conceded putts and unrecognized lies
///    beyond 50 yd, is `Other`
///
/// # Examples
/// ```
/// use golfstat::scoring::categorize;
/// use golfstat::types::{Category, Lie, LaunchMetrics, Shot};
///
/// let drive = Shot {
///     timestamp: None,
///     starting_lie: Lie::Tee,
///     finishing_lie: Lie::Fairway,
///     carry_yards: 250.0,
///     total_yards: 270.0,
///     finish_to_pin_meters: 130.0,
///     gimme: false,
///     hole: None,
///     course: None,
///     launch: LaunchMetrics::default(),
/// };
/// assert_eq!(categorize(&drive), Category::Driving);
/// ```
pub fn categorize(shot: &Shot) -> Category {
    if shot.starting_lie == Lie::Tee {
        Category::Driving
    } else if shot.starting_lie.is_approach_surface() && shot.carry_yards > SHORT_GAME_MAX_CARRY_YD
    {
        Category::Approach
    } else if shot.carry_yards <= SHORT_GAME_MAX_CARRY_YD
        && !matches!(shot.starting_lie, Lie::Tee | Lie::Green)
    {
        Category::ShortGame
    } else if shot.starting_lie == Lie::Green && !shot.gimme {
        Category::Putting
    } else {
        Category::Other
    }
}

/// Estimate the strokes cost of a shot
///
/// A holed shot costs exactly 1.0. Anything else costs
/// `1 + feet_remaining / 8 * 0.1`, so the result is always in `[1, inf)`
/// and equals 1 only when the ball is in the hole.
pub fn strokes_taken(shot: &Shot) -> f64 {
    if shot.is_holed() {
        1.0
    } else {
        1.0 + meters_to_feet(shot.finish_to_pin_meters) / PENALTY_DIVISOR_FT * PENALTY_SCALE
    }
}
