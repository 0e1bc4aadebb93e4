//! Weather stations and the static metadata of the provider that operates them.

use crate::types::position::Position2D;

/// Static description of a weather provider.
#[derive(Debug, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Full name, e.g. "Deutscher Wetterdienst".
    pub name: &'static str,
    /// Abbreviation shown next to station names, e.g. "DWD".
    pub short_name: &'static str,
    pub website: &'static str,
}

/// A fixed measurement and reporting point operated by a provider.
///
/// Stations are created in bulk when a [`crate::StationDirectory`] is loaded
/// and are read-only afterwards. `code` is unique within one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherStation {
    /// Station name as published by the provider (e.g. "Darmstadt").
    pub name: String,
    /// Provider-specific station identifier (e.g. "L886").
    pub code: String,
    pub provider: &'static ProviderInfo,
    pub position: Position2D,
    pub notes: String,
}

impl WeatherStation {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        provider: &'static ProviderInfo,
        position: Position2D,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            provider,
            position,
            notes: String::new(),
        }
    }

    /// Whether `keyword` occurs in the station's name or code (case-sensitive).
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.contains(keyword) || self.code.contains(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_PROVIDER: ProviderInfo = ProviderInfo {
        name: "Test Provider",
        short_name: "TP",
        website: "example.org",
    };

    #[test]
    fn test_matches_name_or_code() {
        let station = WeatherStation::new(
            "Darmstadt",
            "L886",
            &TEST_PROVIDER,
            Position2D::new(8.41, 49.53),
        );
        assert!(station.matches("Darm"));
        assert!(station.matches("L88"));
        assert!(station.matches(""));
        assert!(!station.matches("darmstadt"));
        assert!(!station.matches("ZZZ"));
        assert!(station.notes.is_empty());
    }
}
