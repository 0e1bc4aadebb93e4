//! The entry point tying a provider to its station directory.

use crate::error::WeatherError;
use crate::providers::dwd::Dwd;
use crate::providers::{StationForecasts, WeatherProvider};
use crate::stations::directory::StationDirectory;
use crate::types::station::WeatherStation;
use log::{info, warn};

/// A weather provider together with the stations loaded from it.
///
/// # Examples
///
/// ```no_run
/// # use cliweather::{WeatherClient, WeatherError};
/// let mut client = WeatherClient::dwd()?;
/// client.load_stations()?;
///
/// let batch = client.forecasts_for("Darmstadt");
/// for forecasts in &batch.forecasts {
///     println!("{}", forecasts.daily.day_summary());
/// }
/// for (station, err) in &batch.failed {
///     eprintln!("{} ({}): {err}", station.name, station.code);
/// }
/// # Ok::<(), WeatherError>(())
/// ```
#[derive(Debug)]
pub struct WeatherClient<P: WeatherProvider = Dwd> {
    provider: P,
    directory: StationDirectory,
}

/// Result of a forecast lookup over several stations.
///
/// One station failing does not abort the others; its error is kept in `failed`.
#[derive(Debug)]
pub struct ForecastBatch<'a> {
    pub forecasts: Vec<StationForecasts<'a>>,
    pub failed: Vec<(&'a WeatherStation, WeatherError)>,
}

impl ForecastBatch<'_> {
    /// Stations that publish no forecast at all.
    pub fn unsupported(&self) -> impl Iterator<Item = &WeatherStation> + '_ {
        self.failed
            .iter()
            .filter(|(_, err)| matches!(err, WeatherError::StationUnsupported { .. }))
            .map(|(station, _)| *station)
    }
}

impl WeatherClient<Dwd> {
    /// A DWD client using the default HTTP fetcher.
    pub fn dwd() -> Result<Self, WeatherError> {
        Ok(Self::new(Dwd::new()?))
    }
}

impl<P: WeatherProvider> WeatherClient<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            directory: StationDirectory::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    /// Fetches the provider's station list and merges it into the directory.
    pub fn load_stations(&mut self) -> Result<&[WeatherStation], WeatherError> {
        self.directory.load_stations(&self.provider)
    }

    pub fn stations(&self) -> &[WeatherStation] {
        self.directory.stations()
    }

    pub fn find_stations(&self, keyword: &str) -> Vec<&WeatherStation> {
        self.directory.find_stations(keyword)
    }

    /// Daily, 3-hourly and hourly forecasts of one station.
    pub fn get_station_forecasts<'a>(
        &self,
        station: &'a WeatherStation,
    ) -> Result<StationForecasts<'a>, WeatherError> {
        self.provider.fetch_station_data(station)
    }

    /// Forecasts of every station matching `keyword`.
    pub fn forecasts_for(&self, keyword: &str) -> ForecastBatch<'_> {
        let stations = self.find_stations(keyword);
        let mut batch = ForecastBatch {
            forecasts: Vec::with_capacity(stations.len()),
            failed: Vec::new(),
        };

        for station in stations {
            match self.get_station_forecasts(station) {
                Ok(forecasts) => batch.forecasts.push(forecasts),
                Err(err) => {
                    warn!("No forecast for {} ({}): {}", station.name, station.code, err);
                    batch.failed.push((station, err));
                }
            }
        }

        info!(
            "Forecast lookup '{}': {} succeeded, {} failed",
            keyword,
            batch.forecasts.len(),
            batch.failed.len()
        );
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::CannedFetcher;
    use crate::providers::dwd::DwdConfig;

    const LEXICON: &str = "h1\r\nh2\r\nh3\r\n\
        Darmstadt 917 MN L886 49.88 8.66 144\r\n\
        Darmstadt-Dieburg 918 MN D123 49.90 8.84 150\r\n\
        Frankfurt/Main 1420 MN 10637 50.03 8.52 100\r\n\
        \r\n";

    const PAYLOAD: &str = r#"{"L886":{
        "days":[{"dayDate":"2024-05-01","temperatureMin":50,"temperatureMax":150}],
        "forecast1":{"start":1714521600000,"timeStep":3600000,"sunshine":[0,0,0]},
        "forecast2":{"start":1714521600000,"timeStep":10800000,"sunshine":[0,0]}
    }}"#;

    fn client() -> WeatherClient<Dwd<CannedFetcher>> {
        let fetcher = CannedFetcher::new()
            .with_body("mem://stations", LEXICON)
            .with_body("mem://forecast/L886", PAYLOAD)
            .with_body("mem://forecast/D123", "{}");
        let config = DwdConfig::builder()
            .station_list_url("mem://stations")
            .forecast_url("mem://forecast/")
            .build();
        WeatherClient::new(Dwd::with_fetcher(fetcher, config))
    }

    #[test]
    fn test_load_and_find() {
        let mut client = client();
        assert!(client.stations().is_empty());
        assert_eq!(client.load_stations().unwrap().len(), 3);

        let found = client.find_stations("Darmstadt");
        assert_eq!(found.len(), 2);
        assert!(client.find_stations("ZZZ").is_empty());
        assert_eq!(client.provider().info().short_name, "DWD");
    }

    #[test]
    fn test_get_station_forecasts() {
        let mut client = client();
        client.load_stations().unwrap();
        let station = client.find_stations("L886")[0];

        let [daily, three_hourly, hourly] = client.get_station_forecasts(station).unwrap().into_array();
        assert_eq!(daily[0].temperature, Some(10.0));
        assert_eq!(three_hourly.len(), 1);
        assert_eq!(hourly.len(), 2);
    }

    #[test]
    fn test_forecasts_for_reports_failures_as_batch() {
        let mut client = client();
        client.load_stations().unwrap();

        let batch = client.forecasts_for("Darmstadt");
        assert_eq!(batch.forecasts.len(), 1);
        assert_eq!(batch.forecasts[0].station().code, "L886");
        assert_eq!(batch.failed.len(), 1);
        let unsupported: Vec<&str> = batch.unsupported().map(|s| s.code.as_str()).collect();
        assert_eq!(unsupported, vec!["D123"]);
    }

    #[test]
    fn test_forecasts_for_keeps_non_unsupported_errors() {
        let mut client = client();
        client.load_stations().unwrap();

        // No canned forecast for Frankfurt, so the fetch fails with 404.
        let batch = client.forecasts_for("Frankfurt");
        assert!(batch.forecasts.is_empty());
        assert_eq!(batch.failed.len(), 1);
        assert!(matches!(batch.failed[0].1, WeatherError::SourceUnavailable(_)));
        assert_eq!(batch.unsupported().count(), 0);
    }
}
