use crate::analyzers::frequency::mode;
use crate::models::{month_name, weekday_name, TripTable, WEEKDAYS};
use crate::utils::constants::NO_MATCHING_TRIPS;
use chrono::Weekday;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeStatistics {
    pub total_trips: usize,
    /// 1-based month number.
    pub popular_month: Option<u32>,
    pub popular_day: Option<Weekday>,
    pub popular_hour: Option<u32>,
}

pub struct TimeAnalyzer;

impl TimeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &TripTable) -> TimeStatistics {
        let records = table.records();

        // ties break on the day name, alphabetically
        let popular_day = mode(records.iter().map(|r| weekday_name(r.day_of_week)))
            .and_then(|name| WEEKDAYS.into_iter().find(|day| weekday_name(*day) == name));

        TimeStatistics {
            total_trips: records.len(),
            popular_month: mode(records.iter().map(|r| r.month)),
            popular_day,
            popular_hour: mode(records.iter().map(|r| r.hour)),
        }
    }
}

impl Default for TimeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeStatistics {
    pub fn summary(&self) -> String {
        match (self.popular_month, self.popular_day, self.popular_hour) {
            (Some(month), Some(day), Some(hour)) => format!(
                "Most popular month is {}\n\
                Most popular day of the week is {}\n\
                Most popular start hour is {}",
                month_name(month),
                weekday_name(day),
                hour
            ),
            _ => NO_MATCHING_TRIPS.to_string(),
        }
    }
}
