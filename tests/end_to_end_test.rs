//! End-to-end tests: CSV file in, formatted report out

use golfstat::{
    aggregation::{Aggregator, Totals},
    data_loader::DataLoader,
    error::GolfstatError,
    output::get_formatter,
    types::Category,
};
use tempfile::TempDir;

const HEADER: &str = "Timestamp,Starting Lie,Carry (yd),Finish Distance To Pin,Gimme,Total Distance (yd),Hole,Course,Finishing Lie,HLA (deg),VLA (deg),Spin Axis (deg),Ballspeed (mph)";

/// A nine-shot export: three holes of drive / approach / putt
const SAMPLE_ROWS: &[&str] = &[
    "2025-06-01 09:00:00,tee,251.0,140.0,0,272.0,1,Pinehurst,fairway,-1.2,12.4,3.1,162.5",
    "2025-06-01 09:05:00,fairway,138.0,6.5,0,146.0,1,Pinehurst,green,0.8,24.0,-2.0,98.0",
    "2025-06-01 09:10:00,green,0.0,0.0,0,7.1,1,Pinehurst,green,,,,",
    "2025-06-01 09:20:00,tee,244.0,155.0,0,260.0,2,Pinehurst,rough,2.4,11.8,6.5,159.0",
    "2025-06-01 09:25:00,rough,150.0,9.0,0,158.0,2,Pinehurst,green,-0.5,22.1,1.2,101.0",
    "2025-06-01 09:30:00,green,0.0,0.5,0,9.8,2,Pinehurst,green,,,,",
    "2025-06-02 10:00:00,tee,259.0,130.0,0,281.0,1,Pinehurst,fairway,0.3,12.9,-1.5,165.0",
    "2025-06-02 10:05:00,fairway,128.0,4.2,0,135.0,1,Pinehurst,green,1.1,25.3,0.4,95.0",
    "2025-06-02 10:10:00,green,0.0,0.0,1,4.6,1,Pinehurst,green,,,,",
];

async fn write_sample(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("shot-data.csv");
    let mut contents = String::from(HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    tokio::fs::write(&path, contents).await.unwrap();
    path
}

#[tokio::test]
async fn test_full_pipeline_table_output() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE_ROWS).await;

    let shots = DataLoader::new(&path).load_all().await.unwrap();
    assert_eq!(shots.len(), 9);

    let report = Aggregator::new().build_report(&shots);

    // 3 drives, 3 approaches, 2 putts, 1 gimme in Other
    let counts: Vec<usize> = report.categories.iter().map(|c| c.shot_count).collect();
    assert_eq!(counts, vec![3, 3, 0, 2, 1]);
    assert_eq!(report.totals.shot_count, 9);

    // Two distinct dates, nine shots total
    assert_eq!(report.volume.len(), 2);
    assert_eq!(report.volume.last().unwrap().cumulative, 9);

    // Drives on holes 1 and 2
    assert_eq!(report.drives.len(), 2);
    assert_eq!(report.drives[0].hole, "1");
    assert_eq!(report.drives[0].drives, 2);

    let output = get_formatter(false).format_report(&report);
    assert!(output.contains("=== Strokes Gained ==="));
    assert!(output.contains("=== Proximity by Lie ==="));
    assert!(output.contains("=== Shot Volume ==="));
}

#[tokio::test]
async fn test_full_pipeline_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE_ROWS).await;

    let shots = DataLoader::new(&path).load_all().await.unwrap();
    let report = Aggregator::new().build_report(&shots);

    let output = get_formatter(true).format_report(&report);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["strokes_gained"]["totals"]["shot_count"], 9);
    assert_eq!(value["volume"].as_array().unwrap().len(), 2);
    assert_eq!(value["volume"][1]["cumulative"], 9);

    // Approaches came off fairway (125-150) and rough (150-175)
    let by_lie = value["proximity_by_lie"].as_array().unwrap();
    assert_eq!(by_lie.len(), 2);
    assert_eq!(by_lie[0]["lies"]["fairway"]["shots"], 2);
    assert_eq!(by_lie[1]["lies"]["rough"]["shots"], 1);
}

#[tokio::test]
async fn test_gimme_is_excluded_from_putting_and_totals() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE_ROWS).await;

    let shots = DataLoader::new(&path).load_all().await.unwrap();
    let aggregator = Aggregator::new();

    // Both real putts were under 10 yards; the gimme never shows up
    let putting = aggregator.aggregate_putting(&shots);
    let attempts: usize = putting.iter().map(|b| b.attempts).sum();
    assert_eq!(attempts, 2);

    let categories = aggregator.aggregate_categories(&shots);
    let other = categories
        .iter()
        .find(|c| c.category == Category::Other)
        .unwrap();
    assert_eq!(other.shot_count, 1);

    // Other contributes nothing to the total
    let totals = Totals::from_categories(&categories);
    let scored_sum: f64 = categories
        .iter()
        .filter(|c| c.category != Category::Other)
        .map(|c| c.strokes_gained)
        .sum();
    assert!((totals.strokes_gained - scored_sum).abs() < 1e-9);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let result = DataLoader::new("/nonexistent/shot-data.csv").load_all().await;
    assert!(matches!(result, Err(GolfstatError::Io(_))));
}
