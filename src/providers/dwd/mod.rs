//! Deutscher Wetterdienst: station lexicon and the public forecast API.

pub mod forecast;
pub mod payload;
pub mod station_list;

use crate::error::WeatherError;
use crate::fetch::http::HttpFetcher;
use crate::fetch::Fetcher;
use crate::providers::{StationForecasts, WeatherProvider};
use crate::types::station::{ProviderInfo, WeatherStation};
use bon::Builder;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};

pub static DWD_INFO: ProviderInfo = ProviderInfo {
    name: "Deutscher Wetterdienst",
    short_name: "DWD",
    website: "dwd.de",
};

const STATION_LIST_URL: &str = "https://www.dwd.de/DE/leistungen/klimadatendeutschland/statliste/statlex_rich.txt?view=nasPublication";
const FORECAST_URL: &str = "https://dwd.api.proxy.bund.dev/v30/stationOverviewExtended?stationIds=";

/// Endpoints used by [`Dwd`].
///
/// ```
/// # use cliweather::DwdConfig;
/// let config = DwdConfig::builder()
///     .forecast_url("http://localhost:8080/overview?stationIds=")
///     .build();
/// assert!(config.station_list_url.starts_with("https://www.dwd.de/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct DwdConfig {
    /// Location of the ISO-8859-1 station lexicon.
    #[builder(into, default = STATION_LIST_URL.to_string())]
    pub station_list_url: String,
    /// Forecast endpoint. The station code is appended verbatim.
    #[builder(into, default = FORECAST_URL.to_string())]
    pub forecast_url: String,
}

impl Default for DwdConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DwdConfig {
    pub fn forecast_url_for(&self, code: &str) -> String {
        format!("{}{}", self.forecast_url, code)
    }
}

/// The DWD provider.
///
/// Only stations that publish automated forecasts are supported; for the rest
/// [`WeatherProvider::fetch_station_data`] fails with
/// [`WeatherError::StationUnsupported`].
#[derive(Debug, Clone)]
pub struct Dwd<F: Fetcher = HttpFetcher> {
    fetcher: F,
    config: DwdConfig,
}

impl Dwd<HttpFetcher> {
    /// Creates a provider with the default HTTP fetcher and endpoints.
    pub fn new() -> Result<Self, WeatherError> {
        Ok(Self::with_fetcher(
            HttpFetcher::builder().build()?,
            DwdConfig::default(),
        ))
    }
}

impl<F: Fetcher> Dwd<F> {
    pub fn with_fetcher(fetcher: F, config: DwdConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &DwdConfig {
        &self.config
    }

    fn station_data_at<'a>(
        &self,
        station: &'a WeatherStation,
        today: DateTime<Utc>,
    ) -> Result<StationForecasts<'a>, WeatherError> {
        let url = self.config.forecast_url_for(&station.code);
        debug!("Requesting DWD forecast for {} ({})", station.name, station.code);
        let body = self.fetcher.fetch(&url)?;

        let payload = forecast::parse_station_payload(&body, station)?;
        let forecasts = forecast::station_forecasts(&payload, station, today)?;
        info!(
            "Forecast for {}: {} daily, {} 3-hourly, {} hourly points",
            station.code,
            forecasts.daily.len(),
            forecasts.three_hourly.len(),
            forecasts.hourly.len()
        );
        Ok(forecasts)
    }
}

impl<F: Fetcher> WeatherProvider for Dwd<F> {
    fn info(&self) -> &'static ProviderInfo {
        &DWD_INFO
    }

    fn fetch_stations(&self) -> Result<Vec<WeatherStation>, WeatherError> {
        let bytes = self.fetcher.fetch(&self.config.station_list_url)?;
        let text = station_list::decode_latin1(&bytes);
        let stations = station_list::parse_station_list(&text);
        if stations.is_empty() {
            warn!("DWD station list contained no usable stations");
        } else {
            info!("Parsed {} DWD stations", stations.len());
        }
        Ok(stations)
    }

    fn fetch_station_data<'a>(
        &self,
        station: &'a WeatherStation,
    ) -> Result<StationForecasts<'a>, WeatherError> {
        self.station_data_at(station, Utc::now())
    }
}
