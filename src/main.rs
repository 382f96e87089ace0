//! golfstat - Analyze golf shot data from exported launch-monitor CSV files

use clap::Parser;
use golfstat::{
    aggregation::{Aggregator, Totals},
    cli::{Cli, Command, parse_date_filter},
    data_loader::{DataLoader, collect_shots},
    error::Result,
    filters::ShotFilter,
    output::get_formatter,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The --quiet flag should override RUST_LOG.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("warn")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("golfstat=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build the shot filter from CLI flags
    let mut shot_filter = ShotFilter::new();
    if let Some(since_str) = &cli.since {
        shot_filter = shot_filter.with_since(parse_date_filter(since_str)?);
    }
    if let Some(until_str) = &cli.until {
        shot_filter = shot_filter.with_until(parse_date_filter(until_str)?);
    }
    if let Some(course) = &cli.course {
        shot_filter = shot_filter.with_course(course.clone());
    }

    // Load, filter and collect; zero surviving rows is fatal for the run
    let loader = DataLoader::new(&cli.file);
    let stream = loader.load_shots();
    let filtered = shot_filter.filter_stream(stream).await;
    let shots = collect_shots(filtered).await?;
    info!("Loaded {} shots from {}", shots.len(), cli.file.display());

    let aggregator = Aggregator::new();
    let formatter = get_formatter(cli.json);

    match cli.command.unwrap_or(Command::Summary) {
        Command::Summary => {
            let categories = aggregator.aggregate_categories(&shots);
            let totals = Totals::from_categories(&categories);
            println!("{}", formatter.format_categories(&categories, &totals));
        }
        Command::Proximity => {
            let bands = aggregator.aggregate_proximity(&shots);
            println!("{}", formatter.format_proximity(&bands));
        }
        Command::Putting => {
            let bands = aggregator.aggregate_putting(&shots);
            println!("{}", formatter.format_putting(&bands));
        }
        Command::Transitions => {
            let matrix = aggregator.aggregate_transitions(&shots);
            println!("{}", formatter.format_transitions(&matrix));
        }
        Command::Volume => {
            let volume = aggregator.aggregate_volume(&shots);
            println!("{}", formatter.format_volume(&volume));
        }
        Command::Drives => {
            let drives = aggregator.aggregate_drives(&shots);
            println!("{}", formatter.format_drives(&drives));
        }
        Command::Report => {
            let report = aggregator.build_report(&shots);
            println!("{}", formatter.format_report(&report));
        }
    }

    Ok(())
}
