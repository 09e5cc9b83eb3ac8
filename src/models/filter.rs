use chrono::Weekday;
use std::fmt;

use super::City;
use crate::utils::constants::FILTER_ALL;

/// Weekdays in Monday-first order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Months covered by the datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|month| month.name().to_lowercase() == lowered)
    }

    /// 1-based calendar number.
    pub fn number(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        self.to_chrono().name()
    }

    fn to_chrono(self) -> chrono::Month {
        match self {
            Month::January => chrono::Month::January,
            Month::February => chrono::Month::February,
            Month::March => chrono::Month::March,
            Month::April => chrono::Month::April,
            Month::May => chrono::Month::May,
            Month::June => chrono::Month::June,
        }
    }
}

/// Full English name for any 1-based calendar month number.
pub fn month_name(number: u32) -> String {
    u8::try_from(number)
        .ok()
        .and_then(|n| chrono::Month::try_from(n).ok())
        .map(|month| month.name().to_string())
        .unwrap_or_else(|| format!("month {}", number))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn parse(input: &str) -> Option<Self> {
        if input.to_lowercase() == FILTER_ALL {
            return Some(MonthFilter::All);
        }
        Month::parse(input).map(MonthFilter::Only)
    }

    pub fn matches(&self, month_number: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => month.number() == month_number,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(FILTER_ALL),
            MonthFilter::Only(month) => f.write_str(month.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Accepts "all" or a full weekday name. Abbreviations are rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        if lowered == FILTER_ALL {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day).to_lowercase() == lowered)
            .map(DayFilter::Only)
    }

    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(wanted) => *wanted == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(FILTER_ALL),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

/// A validated city/month/day choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={}, month={}, day={}", self.city, self.month, self.day)
    }
}
