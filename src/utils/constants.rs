/// City data files, relative to the data directory
pub const CHICAGO_FILE: &str = "chicago.csv";
pub const NEW_YORK_CITY_FILE: &str = "new_york_city.csv";
pub const WASHINGTON_FILE: &str = "washington.csv";

/// Column names as they appear in the city CSV headers
pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";
pub const COL_BIRTH_YEAR_ALT: &str = "Birth_Year";

pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_START_TIME,
    COL_TRIP_DURATION,
    COL_START_STATION,
    COL_END_STATION,
    COL_USER_TYPE,
];

/// Accepted start time layouts, tried in order
pub const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Filter keyword meaning "no filter"
pub const FILTER_ALL: &str = "all";

/// Station pair separator for the start/end combination
pub const STATION_PAIR_SEPARATOR: &str = "-";

/// Console layout
pub const PAGE_SIZE: usize = 5;
pub const SEPARATOR_WIDTH: usize = 40;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Logging defaults
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Shown by each report when filtering left nothing to summarise
pub const NO_MATCHING_TRIPS: &str = "No trips match the selected filters.";
