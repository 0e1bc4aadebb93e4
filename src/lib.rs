mod client;
mod error;
mod fetch;
mod providers;
mod stations;
mod summary;
mod types;
pub mod units;

pub use client::{ForecastBatch, WeatherClient};
pub use error::WeatherError;

pub use fetch::error::FetchError;
pub use fetch::http::HttpFetcher;
pub use fetch::Fetcher;

pub use providers::dwd::forecast::{day_forecast, list_forecast};
pub use providers::dwd::payload::{DayRecord, SeriesRecord, StationOverview, StationPayload};
pub use providers::dwd::station_list::{decode_latin1, parse_station_list};
pub use providers::dwd::{Dwd, DwdConfig, DWD_INFO};
pub use providers::{StationForecasts, WeatherProvider};

pub use stations::directory::StationDirectory;

pub use types::bearing::Bearing;
pub use types::forecast::Forecast;
pub use types::forecast_point::ForecastPoint;
pub use types::granularity::Granularity;
pub use types::position::Position2D;
pub use types::station::{ProviderInfo, WeatherStation};
