use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::constants::{CHICAGO_FILE, NEW_YORK_CITY_FILE, WASHINGTON_FILE};

/// Cities with a bundled trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Matches a user-entered name, ignoring case only.
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        Self::ALL.into_iter().find(|city| city.name() == lowered)
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => CHICAGO_FILE,
            City::NewYorkCity => NEW_YORK_CITY_FILE,
            City::Washington => WASHINGTON_FILE,
        }
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(City::parse("chicago"), Some(City::Chicago));
        assert_eq!(City::parse("New York City"), Some(City::NewYorkCity));
        assert_eq!(City::parse("WASHINGTON"), Some(City::Washington));
    }

    #[test]
    fn test_parse_rejects_unknown_and_partial_names() {
        for input in ["boston", "new york", "chi", "", " chicago", "washington dc"] {
            assert_eq!(City::parse(input), None, "accepted {:?}", input);
        }
    }

    #[test]
    fn test_data_path() {
        let path = City::NewYorkCity.data_path(Path::new("data"));
        assert_eq!(path, Path::new("data").join("new_york_city.csv"));
    }
}
