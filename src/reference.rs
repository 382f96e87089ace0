//! External benchmark curves for report overlays
//!
//! Tour-average proximity and make-rate figures shown next to the player's
//! numbers. These are presentation overlays only; no aggregation reads
//! them.

/// Tour-average proximity in feet, one entry per approach band
/// (50-75 through 250+)
pub const TOUR_PROXIMITY_FT: [f64; 9] = [15.0, 22.0, 30.0, 39.0, 50.0, 62.0, 75.0, 90.0, 110.0];

/// Tour-average make percentage, one entry per putting band
/// (0-3 through 30-50)
pub const TOUR_MAKE_PCT: [f64; 7] = [98.0, 85.0, 60.0, 36.0, 22.0, 12.0, 5.0];

/// Tour-average proximity for an approach band index, if in range
pub fn tour_proximity_ft(band_index: usize) -> Option<f64> {
    TOUR_PROXIMITY_FT.get(band_index).copied()
}

/// Tour-average make percentage for a putting band index, if in range
pub fn tour_make_pct(band_index: usize) -> Option<f64> {
    TOUR_MAKE_PCT.get(band_index).copied()
}
