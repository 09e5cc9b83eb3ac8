use crate::cli::prompt::Console;
use crate::error::Result;
use crate::models::{weekday_name, TripRecord, TripTable};
use crate::utils::constants::{
    COL_BIRTH_YEAR, COL_END_STATION, COL_END_TIME, COL_GENDER, COL_START_STATION,
    COL_START_TIME, COL_TRIP_DURATION, COL_USER_TYPE, PAGE_SIZE,
};
use std::io::{BufRead, Write};

const BLANK: &str = "-";

/// Show raw rows five at a time for as long as the user doesn't answer "no".
pub fn display_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    let mut offset = 0;
    let mut answer =
        console.ask("Would you like to display the first 5 rows of data? yes/no:")?;

    loop {
        match answer {
            Some(ref a) if a.to_lowercase() != "no" => {}
            _ => break,
        }

        if offset >= table.len() {
            console.say("No more rows to display.")?;
            break;
        }

        console.say(&format_page(table, offset, PAGE_SIZE))?;
        offset += PAGE_SIZE;

        answer = console.ask("Would you like to display the next 5 rows of data? yes/no:")?;
    }

    Ok(())
}

/// Render `size` rows from `offset` as an aligned text table with a header.
pub fn format_page(table: &TripTable, offset: usize, size: usize) -> String {
    let mut header = vec![String::new(), COL_START_TIME.to_string()];
    if table.has_end_time() {
        header.push(COL_END_TIME.to_string());
    }
    header.extend([
        COL_TRIP_DURATION.to_string(),
        COL_START_STATION.to_string(),
        COL_END_STATION.to_string(),
        COL_USER_TYPE.to_string(),
    ]);
    if table.has_gender() {
        header.push(COL_GENDER.to_string());
    }
    if table.has_birth_year() {
        header.push(COL_BIRTH_YEAR.to_string());
    }
    header.push("month".to_string());
    header.push("day_of_week".to_string());

    let mut rows = vec![header];
    rows.extend(
        table
            .page(offset, size)
            .iter()
            .map(|record| row_cells(record, table)),
    );

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|row| row[c].chars().count()).max().unwrap_or(0))
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cells for one row; optional columns follow the table's flags.
fn row_cells(record: &TripRecord, table: &TripTable) -> Vec<String> {
    let or_blank = |value: Option<&str>| value.unwrap_or(BLANK).to_string();

    let mut cells = vec![
        record.row_index.to_string(),
        record.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
    ];
    if table.has_end_time() {
        cells.push(or_blank(record.end_time.as_deref()));
    }
    cells.extend([
        record.trip_duration.to_string(),
        record.start_station.clone(),
        record.end_station.clone(),
        or_blank(record.user_type.as_deref()),
    ]);
    if table.has_gender() {
        cells.push(or_blank(record.gender.as_deref()));
    }
    if table.has_birth_year() {
        cells.push(
            record
                .birth_year
                .map(|y| format!("{:.0}", y))
                .unwrap_or_else(|| BLANK.to_string()),
        );
    }
    cells.push(record.month.to_string());
    cells.push(weekday_name(record.day_of_week).to_string());
    cells
}
