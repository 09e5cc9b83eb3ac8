pub mod duration_analyzer;
pub mod frequency;
pub mod station_analyzer;
pub mod time_analyzer;
pub mod user_analyzer;

pub use duration_analyzer::{DurationAnalyzer, DurationStatistics};
pub use station_analyzer::{StationAnalyzer, StationStatistics};
pub use time_analyzer::{TimeAnalyzer, TimeStatistics};
pub use user_analyzer::{BirthYearStatistics, BirthYears, UserAnalyzer, UserStatistics};
