//! Output formatting module for golfstat
//!
//! Two formatters behind one trait:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and integration with other
//!   tools
//!
//! Tables that would be empty render a short explanatory line instead, so
//! "no approach shots in this data" is distinguishable from an upload that
//! failed outright.
//!
//! # Examples
//!
//! ```
//! use golfstat::aggregation::{Aggregator, Totals};
//! use golfstat::output::get_formatter;
//!
//! let aggregator = Aggregator::new();
//! let categories = aggregator.aggregate_categories(&[]);
//! let totals = Totals::from_categories(&categories);
//!
//! let formatter = get_formatter(false);
//! println!("{}", formatter.format_categories(&categories, &totals));
//! ```

use crate::aggregation::{
    CategorySummary, DriveSummary, ProximityBand, ProximityByLie, PuttingBand, SessionReport,
    Totals, TransitionMatrix, VolumePoint,
};
use crate::reference::{tour_make_pct, tour_proximity_ft};
use prettytable::{Cell, Row, Table, format, row};
use serde_json::json;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the category-level strokes-gained summary
    fn format_categories(&self, data: &[CategorySummary], totals: &Totals) -> String;

    /// Format approach proximity by distance band
    fn format_proximity(&self, data: &[ProximityBand]) -> String;

    /// Format the approach proximity pivot by carry band and starting lie
    fn format_proximity_by_lie(&self, data: &ProximityByLie) -> String;

    /// Format putting make-rate by distance band
    fn format_putting(&self, data: &[PuttingBand]) -> String;

    /// Format the finishing-lie transition matrix
    fn format_transitions(&self, data: &TransitionMatrix) -> String;

    /// Format the cumulative volume series
    fn format_volume(&self, data: &[VolumePoint]) -> String;

    /// Format per-hole drive distances
    fn format_drives(&self, data: &[DriveSummary]) -> String;

    /// Format the full session report
    fn format_report(&self, report: &SessionReport) -> String;
}

/// Table formatter for human-readable output
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new TableFormatter
    pub fn new() -> Self {
        Self
    }

    /// Signed strokes-gained formatting, e.g. "+1.25" / "-0.40"
    fn format_signed(value: f64) -> String {
        format!("{value:+.2}")
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_categories(&self, data: &[CategorySummary], totals: &Totals) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Category",
            b -> "Shots",
            b -> "Strokes Taken",
            b -> "Baseline",
            b -> "Strokes Gained",
            b -> "SG/Shot"
        ]);

        for summary in data {
            table.add_row(row![
                summary.category.to_string(),
                r -> summary.shot_count,
                r -> format!("{:.2}", summary.strokes_taken_sum),
                r -> format!("{:.2}", summary.baseline_strokes),
                r -> Self::format_signed(summary.strokes_gained),
                r -> format!("{:+.3}", summary.strokes_gained_per_shot)
            ]);
        }

        table.add_row(Row::new(vec![Cell::new(""); 6]));
        table.add_row(row![
            b -> "TOTAL",
            rb -> totals.shot_count,
            "",
            "",
            rb -> Self::format_signed(totals.strokes_gained),
            ""
        ]);

        table.to_string()
    }

    fn format_proximity(&self, data: &[ProximityBand]) -> String {
        if data.is_empty() {
            return "No approach shots over 50 yards in this data\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Carry (yd)",
            b -> "Shots",
            b -> "Avg Finish (ft)",
            b -> "Tour Avg (ft)"
        ]);

        for band in data {
            let tour = tour_proximity_ft(band.band_index)
                .map(|ft| format!("{ft:.0}"))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![
                band.band.label(),
                r -> band.shots,
                r -> format!("{:.1}", band.mean_finish_ft),
                r -> tour
            ]);
        }

        table.to_string()
    }

    fn format_proximity_by_lie(&self, data: &ProximityByLie) -> String {
        if data.rows.is_empty() {
            return "No approach shots over 50 yards in this data\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut titles = vec![Cell::new("Carry (yd)").style_spec("b")];
        for lie in &data.lies {
            titles.push(Cell::new(&lie.to_string()).style_spec("b"));
        }
        table.set_titles(Row::new(titles));

        for row in &data.rows {
            let mut cells = vec![Cell::new(&row.band.label())];
            for (mean, shots) in row.mean_finish_ft.iter().zip(&row.shots) {
                let text = match mean {
                    Some(ft) => format!("{ft:.1} ft ({shots})"),
                    None => "-".to_string(),
                };
                cells.push(Cell::new(&text).style_spec("r"));
            }
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    fn format_putting(&self, data: &[PuttingBand]) -> String {
        if data.is_empty() {
            return "No putts recorded (or all were gimmes)\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Distance (yd)",
            b -> "Made",
            b -> "Attempts",
            b -> "Make %",
            b -> "Tour %"
        ]);

        for band in data {
            let tour = tour_make_pct(band.band_index)
                .map(|pct| format!("{pct:.0}"))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![
                band.band.label(),
                r -> band.made,
                r -> band.attempts,
                r -> format!("{:.1}", band.make_pct),
                r -> tour
            ]);
        }

        table.to_string()
    }

    fn format_transitions(&self, data: &TransitionMatrix) -> String {
        if data.rows.is_empty() {
            return "No shots to cross-tabulate\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut titles = vec![
            Cell::new("Starting Lie").style_spec("b"),
            Cell::new("Shots").style_spec("b"),
        ];
        for lie in &data.finishing {
            titles.push(Cell::new(&lie.to_string()).style_spec("b"));
        }
        table.set_titles(Row::new(titles));

        for transition in &data.rows {
            let mut cells = vec![
                Cell::new(&transition.starting.to_string()),
                Cell::new(&transition.shots.to_string()).style_spec("r"),
            ];
            for pct in &transition.pct {
                cells.push(Cell::new(&format!("{pct:.1}%")).style_spec("r"));
            }
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    fn format_volume(&self, data: &[VolumePoint]) -> String {
        if data.is_empty() {
            return "No dated shots in this data\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Date",
            b -> "Shots",
            b -> "Cumulative"
        ]);

        for point in data {
            table.add_row(row![
                point.date.to_string(),
                r -> point.shots,
                r -> point.cumulative
            ]);
        }

        table.to_string()
    }

    fn format_drives(&self, data: &[DriveSummary]) -> String {
        if data.is_empty() {
            return "No driver shots found in this data\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Hole",
            b -> "Drives",
            b -> "Avg Carry (yd)",
            b -> "Avg Total (yd)",
            b -> "Longest (yd)"
        ]);

        for drive in data {
            table.add_row(row![
                drive.hole,
                r -> drive.drives,
                r -> format!("{:.1}", drive.mean_carry_yards),
                r -> format!("{:.1}", drive.mean_total_yards),
                r -> format!("{:.1}", drive.longest_yards)
            ]);
        }

        table.to_string()
    }

    fn format_report(&self, report: &SessionReport) -> String {
        let mut output = String::new();

        output.push_str("=== Strokes Gained ===\n");
        output.push_str(&self.format_categories(&report.categories, &report.totals));
        output.push_str("\n=== Approach Proximity ===\n");
        output.push_str(&self.format_proximity(&report.proximity));
        output.push_str("\n=== Proximity by Lie ===\n");
        output.push_str(&self.format_proximity_by_lie(&report.proximity_by_lie));
        output.push_str("\n=== Putting ===\n");
        output.push_str(&self.format_putting(&report.putting));
        output.push_str("\n=== Finishing Lies ===\n");
        output.push_str(&self.format_transitions(&report.transitions));
        output.push_str("\n=== Drives ===\n");
        output.push_str(&self.format_drives(&report.drives));
        output.push_str("\n=== Shot Volume ===\n");
        output.push_str(&self.format_volume(&report.volume));

        output
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JsonFormatter
    pub fn new() -> Self {
        Self
    }

    fn categories_json(data: &[CategorySummary], totals: &Totals) -> serde_json::Value {
        json!({
            "categories": data.iter().map(|s| json!({
                "category": s.category.to_string(),
                "shot_count": s.shot_count,
                "strokes_taken_sum": s.strokes_taken_sum,
                "baseline_strokes": s.baseline_strokes,
                "strokes_gained": s.strokes_gained,
                "strokes_gained_per_shot": s.strokes_gained_per_shot,
            })).collect::<Vec<_>>(),
            "totals": {
                "shot_count": totals.shot_count,
                "strokes_gained": totals.strokes_gained,
            }
        })
    }

    fn proximity_json(data: &[ProximityBand]) -> serde_json::Value {
        json!(data.iter().map(|b| json!({
            "band": b.band.label(),
            "shots": b.shots,
            "mean_finish_ft": b.mean_finish_ft,
            "tour_avg_ft": tour_proximity_ft(b.band_index),
        })).collect::<Vec<_>>())
    }

    fn proximity_by_lie_json(data: &ProximityByLie) -> serde_json::Value {
        json!(data.rows.iter().map(|r| json!({
            "band": r.band.label(),
            "lies": data.lies.iter().enumerate()
                .filter(|(i, _)| r.shots[*i] > 0)
                .map(|(i, lie)| (lie.to_string(), json!({
                    "shots": r.shots[i],
                    "mean_finish_ft": r.mean_finish_ft[i],
                })))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
        })).collect::<Vec<_>>())
    }

    fn putting_json(data: &[PuttingBand]) -> serde_json::Value {
        json!(data.iter().map(|b| json!({
            "band": b.band.label(),
            "made": b.made,
            "attempts": b.attempts,
            "make_pct": b.make_pct,
            "tour_pct": tour_make_pct(b.band_index),
        })).collect::<Vec<_>>())
    }

    fn transitions_json(data: &TransitionMatrix) -> serde_json::Value {
        json!(data.rows.iter().map(|r| json!({
            "starting_lie": r.starting.to_string(),
            "shots": r.shots,
            "finishing_pct": data.finishing.iter().zip(&r.pct)
                .map(|(lie, pct)| (lie.to_string(), json!(pct)))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
        })).collect::<Vec<_>>())
    }

    fn volume_json(data: &[VolumePoint]) -> serde_json::Value {
        json!(data.iter().map(|p| json!({
            "date": p.date.to_string(),
            "shots": p.shots,
            "cumulative": p.cumulative,
        })).collect::<Vec<_>>())
    }

    fn drives_json(data: &[DriveSummary]) -> serde_json::Value {
        json!(data.iter().map(|d| json!({
            "hole": d.hole,
            "drives": d.drives,
            "mean_carry_yards": d.mean_carry_yards,
            "mean_total_yards": d.mean_total_yards,
            "longest_yards": d.longest_yards,
        })).collect::<Vec<_>>())
    }

    fn pretty(value: serde_json::Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_categories(&self, data: &[CategorySummary], totals: &Totals) -> String {
        Self::pretty(Self::categories_json(data, totals))
    }

    fn format_proximity(&self, data: &[ProximityBand]) -> String {
        Self::pretty(Self::proximity_json(data))
    }

    fn format_proximity_by_lie(&self, data: &ProximityByLie) -> String {
        Self::pretty(Self::proximity_by_lie_json(data))
    }

    fn format_putting(&self, data: &[PuttingBand]) -> String {
        Self::pretty(Self::putting_json(data))
    }

    fn format_transitions(&self, data: &TransitionMatrix) -> String {
        Self::pretty(Self::transitions_json(data))
    }

    fn format_volume(&self, data: &[VolumePoint]) -> String {
        Self::pretty(Self::volume_json(data))
    }

    fn format_drives(&self, data: &[DriveSummary]) -> String {
        Self::pretty(Self::drives_json(data))
    }

    fn format_report(&self, report: &SessionReport) -> String {
        Self::pretty(json!({
            "strokes_gained": Self::categories_json(&report.categories, &report.totals),
            "proximity": Self::proximity_json(&report.proximity),
            "proximity_by_lie": Self::proximity_by_lie_json(&report.proximity_by_lie),
            "putting": Self::putting_json(&report.putting),
            "transitions": Self::transitions_json(&report.transitions),
            "drives": Self::drives_json(&report.drives),
            "volume": Self::volume_json(&report.volume),
        }))
    }
}

/// Get the appropriate formatter for the output mode
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter::new())
    } else {
        Box::new(TableFormatter::new())
    }
}
