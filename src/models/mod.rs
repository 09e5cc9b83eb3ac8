pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::{month_name, weekday_name, DayFilter, FilterSelection, Month, MonthFilter, WEEKDAYS};
pub use trip::{TripRecord, TripTable};
