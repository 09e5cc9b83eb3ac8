use crate::models::TripTable;
use crate::utils::constants::{NO_MATCHING_TRIPS, SECONDS_PER_HOUR};

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStatistics {
    pub total_trips: usize,
    pub total_seconds: f64,
    /// `None` for an empty table.
    pub mean_seconds: Option<f64>,
}

pub struct DurationAnalyzer;

impl DurationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &TripTable) -> DurationStatistics {
        let total_trips = table.len();
        let total_seconds: f64 = table.records().iter().map(|r| r.trip_duration).sum();

        let mean_seconds = if total_trips > 0 {
            Some(total_seconds / total_trips as f64)
        } else {
            None
        };

        DurationStatistics {
            total_trips,
            total_seconds,
            mean_seconds,
        }
    }
}

impl Default for DurationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DurationStatistics {
    pub fn total_hours(&self) -> f64 {
        self.total_seconds / SECONDS_PER_HOUR
    }

    pub fn mean_hours(&self) -> Option<f64> {
        self.mean_seconds.map(|s| s / SECONDS_PER_HOUR)
    }

    pub fn summary(&self) -> String {
        match (self.mean_seconds, self.mean_hours()) {
            (Some(mean_seconds), Some(mean_hours)) => format!(
                "Total travel time is: {} seconds, or {:.2} hours\n\
                Mean travel time is: {} seconds, or {:.2} hours",
                self.total_seconds,
                self.total_hours(),
                mean_seconds,
                mean_hours
            ),
            _ => NO_MATCHING_TRIPS.to_string(),
        }
    }
}
