use crate::error::{ProcessingError, Result};
use crate::models::{City, FilterSelection, TripRecord, TripTable};
use crate::utils::constants::{
    COL_BIRTH_YEAR, COL_BIRTH_YEAR_ALT, COL_END_TIME, COL_GENDER, REQUIRED_COLUMNS,
    TIMESTAMP_FORMATS,
};
use crate::utils::ProgressReporter;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Row layout shared by the city files. Unknown columns (the unnamed
/// index column, for one) are ignored.
#[derive(Debug, Deserialize)]
struct RawTripRow {
    #[serde(rename = "Start Time")]
    start_time: String,

    #[serde(rename = "End Time", default)]
    end_time: Option<String>,

    #[serde(rename = "Trip Duration")]
    trip_duration: f64,

    #[serde(rename = "Start Station")]
    start_station: String,

    #[serde(rename = "End Station")]
    end_station: String,

    #[serde(rename = "User Type", default)]
    user_type: Option<String>,

    #[serde(rename = "Gender", default)]
    gender: Option<String>,

    #[serde(rename = "Birth Year", alias = "Birth_Year", default)]
    birth_year: Option<f64>,
}

pub struct TripReader {
    data_dir: PathBuf,
    show_progress: bool,
}

impl TripReader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Read the city's file and apply the month and day filters.
    pub fn load(&self, selection: &FilterSelection) -> Result<TripTable> {
        let table = self.read_city(selection.city)?;
        let total = table.len();

        let filtered = table.filtered(selection.month, selection.day);
        info!(
            "{}: {} of {} trips match month={} day={}",
            selection.city,
            filtered.len(),
            total,
            selection.month,
            selection.day
        );

        Ok(filtered)
    }

    /// Read every trip for a city, unfiltered.
    pub fn read_city(&self, city: City) -> Result<TripTable> {
        let path = city.data_path(&self.data_dir);
        let progress = ProgressReporter::new_spinner(
            &format!("Loading {}...", path.display()),
            !self.show_progress,
        );

        let table = self.read_trips(&path)?;
        progress.finish_and_clear();

        Ok(table)
    }

    pub fn read_trips(&self, path: &Path) -> Result<TripTable> {
        debug!("reading trips from {}", path.display());
        let file = File::open(path)?;
        self.read_from(BufReader::new(file))
    }

    /// Parse CSV trip data from any reader.
    pub fn read_from<R: Read>(&self, source: R) -> Result<TripTable> {
        let mut reader = csv::Reader::from_reader(source);

        let headers = reader.headers()?.clone();
        let has_column = |name: &str| headers.iter().any(|h| h == name);

        for column in REQUIRED_COLUMNS {
            if !has_column(column) {
                return Err(ProcessingError::MissingData(format!(
                    "column '{}' not found in header",
                    column
                )));
            }
        }
        // both spellings would map onto the same field
        if has_column(COL_BIRTH_YEAR) && has_column(COL_BIRTH_YEAR_ALT) {
            return Err(ProcessingError::InvalidFormat(format!(
                "both '{}' and '{}' columns present",
                COL_BIRTH_YEAR, COL_BIRTH_YEAR_ALT
            )));
        }
        let has_end_time = has_column(COL_END_TIME);
        let has_gender = has_column(COL_GENDER);
        let has_birth_year = has_column(COL_BIRTH_YEAR) || has_column(COL_BIRTH_YEAR_ALT);

        let mut records = Vec::new();
        let mut unnamed_stations = 0usize;

        for (row_index, row) in reader.deserialize::<RawTripRow>().enumerate() {
            let row = row?;
            let start_time = parse_timestamp(&row.start_time).map_err(|_| {
                ProcessingError::InvalidFormat(format!(
                    "row {}: invalid start time '{}'",
                    row_index + 1,
                    row.start_time
                ))
            })?;

            let record = TripRecord::new(
                row_index,
                start_time,
                row.trip_duration,
                row.start_station,
                row.end_station,
            )
            .with_end_time(row.end_time)
            .with_user_type(row.user_type)
            .with_gender(row.gender)
            .with_birth_year(row.birth_year);

            if !record.has_station_names() {
                unnamed_stations += 1;
            }
            records.push(record);
        }

        if unnamed_stations > 0 {
            warn!("{} trips have a blank start or end station", unnamed_stations);
        }
        debug!(
            "read {} trips (gender: {}, birth year: {})",
            records.len(),
            has_gender,
            has_birth_year
        );

        Ok(TripTable::new(records, has_gender, has_birth_year).with_end_time_column(has_end_time))
    }
}

/// Parse a start/end timestamp such as `2017-01-01 09:07:57`.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    let mut last_error = None;

    for format in TIMESTAMP_FORMATS {
        match NaiveDateTime::parse_from_str(value, format) {
            Ok(timestamp) => return Ok(timestamp),
            Err(e) => last_error = Some(e),
        }
    }

    match last_error {
        Some(e) => Err(e.into()),
        None => Err(ProcessingError::InvalidFormat(format!(
            "Invalid timestamp: '{}'",
            value
        ))),
    }
}
