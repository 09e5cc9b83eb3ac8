use crate::analyzers::frequency::mode;
use crate::models::TripTable;
use crate::utils::constants::NO_MATCHING_TRIPS;

#[derive(Debug, Clone, PartialEq)]
pub struct StationStatistics {
    pub popular_start_station: Option<String>,
    pub popular_end_station: Option<String>,
    /// "<start>-<end>"
    pub popular_trip: Option<String>,
}

pub struct StationAnalyzer;

impl StationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &TripTable) -> StationStatistics {
        let records = table.records();

        StationStatistics {
            popular_start_station: mode(records.iter().map(|r| r.start_station.as_str()))
                .map(str::to_string),
            popular_end_station: mode(records.iter().map(|r| r.end_station.as_str()))
                .map(str::to_string),
            popular_trip: mode(records.iter().map(|r| r.station_pair())),
        }
    }
}

impl Default for StationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StationStatistics {
    pub fn summary(&self) -> String {
        match (
            &self.popular_start_station,
            &self.popular_end_station,
            &self.popular_trip,
        ) {
            (Some(start), Some(end), Some(trip)) => format!(
                "Most popular start station: {}\n\
                Most popular end station: {}\n\
                Most popular Start End Station combination: {}",
                start, end, trip
            ),
            _ => NO_MATCHING_TRIPS.to_string(),
        }
    }
}
