//! Weather providers and the capability interface they implement.

pub mod dwd;

use crate::error::WeatherError;
use crate::types::forecast::Forecast;
use crate::types::granularity::Granularity;
use crate::types::station::{ProviderInfo, WeatherStation};

/// A source of weather stations and their forecasts.
pub trait WeatherProvider {
    /// Static metadata of this provider.
    fn info(&self) -> &'static ProviderInfo;

    /// Retrieves the provider's full station list, deduplicated by code.
    fn fetch_stations(&self) -> Result<Vec<WeatherStation>, WeatherError>;

    /// Retrieves and normalizes all forecasts for one station.
    fn fetch_station_data<'a>(
        &self,
        station: &'a WeatherStation,
    ) -> Result<StationForecasts<'a>, WeatherError>;
}

impl<P: WeatherProvider + ?Sized> WeatherProvider for &P {
    fn info(&self) -> &'static ProviderInfo {
        (**self).info()
    }

    fn fetch_stations(&self) -> Result<Vec<WeatherStation>, WeatherError> {
        (**self).fetch_stations()
    }

    fn fetch_station_data<'a>(
        &self,
        station: &'a WeatherStation,
    ) -> Result<StationForecasts<'a>, WeatherError> {
        (**self).fetch_station_data(station)
    }
}

/// The three forecasts published for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationForecasts<'a> {
    pub daily: Forecast<'a>,
    pub three_hourly: Forecast<'a>,
    pub hourly: Forecast<'a>,
}

impl<'a> StationForecasts<'a> {
    pub fn get(&self, granularity: Granularity) -> &Forecast<'a> {
        match granularity {
            Granularity::Daily => &self.daily,
            Granularity::ThreeHourly => &self.three_hourly,
            Granularity::Hourly => &self.hourly,
        }
    }

    /// The forecasts in daily, 3-hourly, hourly order.
    pub fn into_array(self) -> [Forecast<'a>; 3] {
        [self.daily, self.three_hourly, self.hourly]
    }

    pub fn station(&self) -> &'a WeatherStation {
        self.daily.station()
    }
}
