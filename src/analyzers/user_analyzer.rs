use crate::analyzers::frequency::{mode, value_counts};
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq)]
pub struct BirthYearStatistics {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BirthYears {
    /// The city's file has no birth year column.
    Absent,
    /// The column exists but every remaining cell is blank.
    NoValues,
    Summary(BirthYearStatistics),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStatistics {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city's file has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: BirthYears,
}

pub struct UserAnalyzer;

impl UserAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &TripTable) -> UserStatistics {
        let records = table.records();

        let user_types = owned(value_counts(
            records.iter().filter_map(|r| r.user_type.as_deref()),
        ));

        let genders = table.has_gender().then(|| {
            owned(value_counts(
                records.iter().filter_map(|r| r.gender.as_deref()),
            ))
        });

        let birth_years = if table.has_birth_year() {
            // years arrive as floats ("1992.0"); whole years are what gets reported
            let years: Vec<i64> = records
                .iter()
                .filter_map(|r| r.birth_year)
                .filter(|y| y.is_finite())
                .map(|y| y as i64)
                .collect();
            summarize_birth_years(&years)
        } else {
            BirthYears::Absent
        };

        UserStatistics {
            user_types,
            genders,
            birth_years,
        }
    }
}

impl Default for UserAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

fn summarize_birth_years(years: &[i64]) -> BirthYears {
    let (Some(&earliest), Some(&most_recent), Some(most_common)) = (
        years.iter().min(),
        years.iter().max(),
        mode(years.iter().copied()),
    ) else {
        return BirthYears::NoValues;
    };

    BirthYears::Summary(BirthYearStatistics {
        earliest,
        most_recent,
        most_common,
    })
}

fn format_counts(counts: &[(String, usize)]) -> String {
    if counts.is_empty() {
        return "  (none recorded)".to_string();
    }
    counts
        .iter()
        .map(|(value, count)| format!("  {}: {}", value, count))
        .collect::<Vec<_>>()
        .join("\n")
}

impl UserStatistics {
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("The number of user types is:\n");
        summary.push_str(&format_counts(&self.user_types));
        summary.push('\n');

        match &self.genders {
            Some(genders) => {
                summary.push_str("\nThe number of user gender is:\n");
                summary.push_str(&format_counts(genders));
                summary.push('\n');
            }
            None => summary.push_str("\nThere is no gender information in this city\n"),
        }

        match &self.birth_years {
            BirthYears::Summary(years) => summary.push_str(&format!(
                "\nThe earliest birth year is: {}\n\
                The most recent birth year is: {}\n\
                The most common birth year is: {}",
                years.earliest, years.most_recent, years.most_common
            )),
            BirthYears::NoValues => {
                summary.push_str("\nNo birth years were recorded for the selected trips")
            }
            BirthYears::Absent => {
                summary.push_str("\nThere is no birth year information in this city")
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripRecord;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record(i: usize, user_type: &str, gender: Option<&str>, birth_year: Option<f64>) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, 6, 5)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        TripRecord::new(i, start, 900.0, "A".to_string(), "B".to_string())
            .with_user_type(Some(user_type.to_string()))
            .with_gender(gender.map(str::to_string))
            .with_birth_year(birth_year)
    }

    #[test]
    fn test_full_demographics() {
        let table = TripTable::new(
            vec![
                record(0, "Subscriber", Some("Male"), Some(1989.0)),
                record(1, "Subscriber", Some("Female"), Some(1992.0)),
                record(2, "Customer", None, None),
                record(3, "Subscriber", Some("Male"), Some(1992.0)),
                record(4, "Customer", Some("Male"), Some(1955.0)),
            ],
            true,
            true,
        );

        let stats = UserAnalyzer::new().analyze(&table);

        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 2)]
        );
        assert_eq!(
            stats.genders,
            Some(vec![("Male".to_string(), 3), ("Female".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            BirthYears::Summary(BirthYearStatistics {
                earliest: 1955,
                most_recent: 1992,
                most_common: 1992,
            })
        );
        assert_eq!(
            stats.summary(),
            "The number of user types is:\n  Subscriber: 3\n  Customer: 2\n\
             \nThe number of user gender is:\n  Male: 3\n  Female: 1\n\
             \nThe earliest birth year is: 1955\n\
             The most recent birth year is: 1992\n\
             The most common birth year is: 1992"
        );
    }

    #[test]
    fn test_city_without_gender_or_birth_year() {
        let table = TripTable::new(
            vec![record(0, "Subscriber", None, None), record(1, "Customer", None, None)],
            false,
            false,
        );

        let stats = UserAnalyzer::new().analyze(&table);

        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, BirthYears::Absent);
        let summary = stats.summary();
        assert!(summary.contains("There is no gender information in this city"));
        assert!(summary.contains("There is no birth year information in this city"));
    }

    #[test]
    fn test_birth_year_column_with_only_blanks() {
        let table = TripTable::new(vec![record(0, "Customer", None, None)], true, true);

        let stats = UserAnalyzer::new().analyze(&table);

        assert_eq!(stats.genders, Some(vec![]));
        assert_eq!(stats.birth_years, BirthYears::NoValues);
    }

    #[test]
    fn test_birth_year_mode_tie_prefers_earliest() {
        assert_eq!(
            summarize_birth_years(&[1990, 1980, 1990, 1980]),
            BirthYears::Summary(BirthYearStatistics {
                earliest: 1980,
                most_recent: 1990,
                most_common: 1980,
            })
        );
    }
}
