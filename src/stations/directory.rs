//! In-memory directory of stations loaded from a provider.

use crate::error::WeatherError;
use crate::providers::WeatherProvider;
use crate::types::station::WeatherStation;
use log::{debug, info};
use std::collections::HashMap;

/// The stations known to a client, unique by code and in load order.
///
/// Loading merges: a station whose code is already present is skipped, so
/// repeated loads never duplicate entries. The directory only grows. Stations
/// the provider stops publishing stay until [`StationDirectory::clear`].
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: Vec<WeatherStation>,
    /// Station code to index in `stations`.
    index: HashMap<String, usize>,
}

impl StationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the provider's station list and merges it into the directory.
    ///
    /// Returns every station in the directory after the merge. On failure the
    /// directory is left unchanged.
    pub fn load_stations<P: WeatherProvider>(
        &mut self,
        provider: &P,
    ) -> Result<&[WeatherStation], WeatherError> {
        let fetched = provider.fetch_stations()?;
        let fetched_count = fetched.len();
        let added = self.merge(fetched);
        info!(
            "Loaded {} {} stations, {} new, {} total",
            fetched_count,
            provider.info().short_name,
            added,
            self.stations.len()
        );
        Ok(&self.stations)
    }

    /// Adds stations whose code is not yet known. Returns how many were added.
    pub fn merge(&mut self, stations: impl IntoIterator<Item = WeatherStation>) -> usize {
        let before = self.stations.len();
        for station in stations {
            if self.index.contains_key(&station.code) {
                debug!("Station {} already known, skipping", station.code);
                continue;
            }
            self.index.insert(station.code.clone(), self.stations.len());
            self.stations.push(station);
        }
        self.stations.len() - before
    }

    /// All stations whose name or code contains `keyword` (case-sensitive), in load order.
    pub fn find_stations(&self, keyword: &str) -> Vec<&WeatherStation> {
        self.stations
            .iter()
            .filter(|station| station.matches(keyword))
            .collect()
    }

    pub fn get(&self, code: &str) -> Option<&WeatherStation> {
        self.index.get(code).and_then(|&position| self.stations.get(position))
    }

    pub fn stations(&self) -> &[WeatherStation] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn clear(&mut self) {
        self.stations.clear();
        self.index.clear();
    }
}

impl Extend<WeatherStation> for StationDirectory {
    fn extend<I: IntoIterator<Item = WeatherStation>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

impl FromIterator<WeatherStation> for StationDirectory {
    fn from_iter<I: IntoIterator<Item = WeatherStation>>(iter: I) -> Self {
        let mut directory = Self::new();
        directory.merge(iter);
        directory
    }
}
