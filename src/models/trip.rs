use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use super::{DayFilter, MonthFilter};
use crate::utils::constants::STATION_PAIR_SEPARATOR;

/// One trip row with its derived time columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Position of the row in the source file, kept through filtering.
    pub row_index: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,

    pub month: u32,
    pub day_of_week: Weekday,
    pub hour: u32,
}

impl TripRecord {
    pub fn new(
        row_index: usize,
        start_time: NaiveDateTime,
        trip_duration: f64,
        start_station: String,
        end_station: String,
    ) -> Self {
        Self {
            row_index,
            start_time,
            end_time: None,
            trip_duration,
            start_station,
            end_station,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_end_time(mut self, end_time: Option<String>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<f64>) -> Self {
        self.birth_year = birth_year;
        self
    }

    pub fn station_pair(&self) -> String {
        format!(
            "{}{}{}",
            self.start_station, STATION_PAIR_SEPARATOR, self.end_station
        )
    }

    pub fn has_station_names(&self) -> bool {
        !self.start_station.trim().is_empty() && !self.end_station.trim().is_empty()
    }
}

/// Trip rows for one city plus which optional columns its file carried.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    records: Vec<TripRecord>,
    has_end_time: bool,
    has_gender: bool,
    has_birth_year: bool,
}

impl TripTable {
    pub fn new(records: Vec<TripRecord>, has_gender: bool, has_birth_year: bool) -> Self {
        Self {
            records,
            has_end_time: false,
            has_gender,
            has_birth_year,
        }
    }

    pub fn with_end_time_column(mut self, has_end_time: bool) -> Self {
        self.has_end_time = has_end_time;
        self
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_end_time(&self) -> bool {
        self.has_end_time
    }

    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// Keeps rows matching both filters; column flags carry over.
    pub fn filtered(self, month: MonthFilter, day: DayFilter) -> Self {
        let records = self
            .records
            .into_iter()
            .filter(|r| month.matches(r.month) && day.matches(r.day_of_week))
            .collect();

        Self {
            records,
            has_end_time: self.has_end_time,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }

    /// Up to `size` rows from `offset`; empty once past the end.
    pub fn page(&self, offset: usize, size: usize) -> &[TripRecord] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }
}
