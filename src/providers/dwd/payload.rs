//! Raw shapes of the DWD `stationOverviewExtended` JSON response.
//!
//! All numeric fields are fixed-point values in tenths. Any field may be
//! `null` or missing; normalization happens in [`super::forecast`].

use serde::Deserialize;
use std::collections::HashMap;

/// The whole response: station code to that station's payload.
pub type StationOverview = HashMap<String, Option<StationPayload>>;

/// Forecast payload of one station.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPayload {
    pub days: Option<Vec<DayRecord>>,
    /// Hourly series.
    pub forecast1: Option<SeriesRecord>,
    /// 3-hourly series.
    pub forecast2: Option<SeriesRecord>,
}

impl StationPayload {
    pub fn is_empty(&self) -> bool {
        self.days.is_none() && self.forecast1.is_none() && self.forecast2.is_none()
    }
}

/// One entry of `days`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// ISO date, e.g. "2024-05-01".
    pub day_date: Option<String>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub precipitation: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_direction: Option<f64>,
    /// Sunshine in tenths of a minute.
    pub sunshine: Option<f64>,
}

/// A list-based series (`forecast1` / `forecast2`) with one parallel array per measurement.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRecord {
    /// Epoch milliseconds of the first sample.
    pub start: Option<i64>,
    /// Milliseconds between samples.
    pub time_step: Option<i64>,
    pub temperature: Option<Vec<Option<f64>>>,
    pub wind_speed: Option<Vec<Option<f64>>>,
    pub wind_direction: Option<Vec<Option<f64>>>,
    pub wind_gust: Option<Vec<Option<f64>>>,
    pub precipitation_total: Option<Vec<Option<f64>>>,
    pub sunshine: Option<Vec<Option<f64>>>,
    pub dew_point2m: Option<Vec<Option<f64>>>,
    pub surface_pressure: Option<Vec<Option<f64>>>,
    pub humidity: Option<Vec<Option<f64>>>,
}
