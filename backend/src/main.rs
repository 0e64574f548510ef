use anyhow::bail;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::Level;

use temple_tracker_backend::Backend;

/// Print the Tamil calendar date and festivals for a Gregorian date.
#[derive(Parser)]
#[command(name = "temple-cal", about = "Tamil calendar and festival lookup")]
struct Args {
    /// Gregorian date to resolve (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let backend = Backend::new();
    let service = &backend.festival_service;
    let Some(tamil) = service.resolve_tamil_date(date) else {
        bail!("calendar data unavailable for {}", date);
    };

    println!(
        "{} -> {} ({}) {}, {} [{}]",
        date,
        tamil.month.english_name(),
        tamil.month.tamil_name(),
        tamil.day,
        tamil.year,
        tamil.month.season()
    );

    let matches = service.festivals_for_date(date);
    if matches.is_empty() {
        println!("No festivals on this day.");
    } else {
        for m in matches {
            println!("  {} ({})", m.festival.name, m.festival.tamil_name);
        }
    }

    Ok(())
}
