use crate::analyzers::{DurationAnalyzer, StationAnalyzer, TimeAnalyzer, UserAnalyzer};
use crate::cli::args::Cli;
use crate::cli::pager::display_raw_data;
use crate::cli::prompt::{collect_filters, Console};
use crate::error::{ProcessingError, Result};
use crate::models::TripTable;
use crate::readers::TripReader;
use crate::utils::constants::separator;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    info!("data directory: {}", cli.data_dir.display());

    let reader = TripReader::new(&cli.data_dir).with_progress(!cli.quiet);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match run_session(&mut console, &reader) {
        Err(ProcessingError::Cancelled) => {
            info!("input closed, exiting");
            console.say("")?;
            Ok(())
        }
        other => other,
    }
}

/// Filter, load, page and report until the user declines to restart.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    reader: &TripReader,
) -> Result<()> {
    loop {
        let selection = collect_filters(console)?;
        info!("selected {}", selection);

        let table = reader.load(&selection)?;

        display_raw_data(console, &table)?;
        print_reports(console, &table)?;

        let restart = console.ask("\nWould you like to restart? Enter yes or no.\n")?;
        if restart.map(|answer| answer.to_lowercase()).as_deref() != Some("yes") {
            return Ok(());
        }
    }
}

/// The four reports, always in the same order.
pub fn print_reports<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    print_report(console, "Calculating The Most Frequent Times of Travel...", || {
        TimeAnalyzer::new().analyze(table).summary()
    })?;
    print_report(console, "Calculating The Most Popular Stations and Trip...", || {
        StationAnalyzer::new().analyze(table).summary()
    })?;
    print_report(console, "Calculating Trip Duration...", || {
        DurationAnalyzer::new().analyze(table).summary()
    })?;
    print_report(console, "Calculating User Stats...", || {
        UserAnalyzer::new().analyze(table).summary()
    })?;

    Ok(())
}

fn print_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    heading: &str,
    body: impl FnOnce() -> String,
) -> Result<()> {
    console.say(&format!("\n{}\n", heading))?;

    let start = Instant::now();
    let text = body();
    let elapsed = start.elapsed();

    console.say(&text)?;
    console.say(&format!("\nThis took {} seconds.", elapsed.as_secs_f64()))?;
    console.say(&separator())?;

    Ok(())
}
