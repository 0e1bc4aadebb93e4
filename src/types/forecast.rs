//! The ordered time series of forecast points for one station.

use crate::types::forecast_point::ForecastPoint;
use crate::types::station::WeatherStation;
use chrono::{DateTime, TimeDelta, Utc};
use std::ops::Index;

/// An ordered time series of [`ForecastPoint`]s for one station at one granularity.
///
/// Points only enter through [`Forecast::insert`] (or [`Forecast::insert_sorted`]),
/// never through bulk sorting or truncation. A forecast borrows the station it
/// describes; many forecasts may share one station.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast<'a> {
    station: &'a WeatherStation,
    time_resolution: TimeDelta,
    time_offset: DateTime<Utc>,
    points: Vec<ForecastPoint>,
}

impl<'a> Forecast<'a> {
    pub fn new(
        station: &'a WeatherStation,
        time_resolution: TimeDelta,
        time_offset: DateTime<Utc>,
    ) -> Self {
        Self {
            station,
            time_resolution,
            time_offset,
            points: Vec::new(),
        }
    }

    pub fn with_capacity(
        station: &'a WeatherStation,
        time_resolution: TimeDelta,
        time_offset: DateTime<Utc>,
        capacity: usize,
    ) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            ..Self::new(station, time_resolution, time_offset)
        }
    }

    /// Inserts a point using the provider-compatible placement rule.
    ///
    /// Skips every existing point whose timestamp is strictly earlier than the
    /// new one, then places the new point one slot *after* that position
    /// (appending when that runs past the end). Points arriving in
    /// non-decreasing timestamp order therefore stay sorted, and an equal
    /// timestamp lands behind the first point it ties with. A point earlier
    /// than the current head is placed at index 1, not 0, so out-of-order
    /// insertion does not keep the series sorted. Use
    /// [`Forecast::insert_sorted`] when arbitrary order must be supported.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::{TimeDelta, TimeZone, Utc};
    /// # use cliweather::{Forecast, ForecastPoint, Position2D, WeatherStation, DWD_INFO};
    /// let station = WeatherStation::new("Darmstadt", "L886", &DWD_INFO, Position2D::new(8.41, 49.53));
    /// let t = |h| Utc.with_ymd_and_hms(2024, 5, 1, h, 0, 0).unwrap();
    /// let mut forecast = Forecast::new(&station, TimeDelta::hours(1), t(0));
    ///
    /// forecast.insert(ForecastPoint::at(t(5)));
    /// forecast.insert(ForecastPoint::at(t(3)));
    ///
    /// let hours: Vec<_> = forecast.iter().map(|p| p.timestamp).collect();
    /// assert_eq!(hours, vec![t(5), t(3)]);
    /// ```
    pub fn insert(&mut self, point: ForecastPoint) {
        let earlier = self
            .points
            .iter()
            .take_while(|existing| existing.timestamp < point.timestamp)
            .count();
        let index = (earlier + 1).min(self.points.len());
        self.points.insert(index, point);
    }

    /// Inserts a point after every point with an equal or earlier timestamp.
    ///
    /// Keeps the series non-decreasing for any insertion order, with ties kept
    /// in insertion order.
    pub fn insert_sorted(&mut self, point: ForecastPoint) {
        let index = self
            .points
            .partition_point(|existing| existing.timestamp <= point.timestamp);
        self.points.insert(index, point);
    }

    pub fn station(&self) -> &'a WeatherStation {
        self.station
    }

    pub fn time_resolution(&self) -> TimeDelta {
        self.time_resolution
    }

    pub fn time_offset(&self) -> DateTime<Utc> {
        self.time_offset
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }

    pub fn is_sorted(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }
}

impl Index<usize> for Forecast<'_> {
    type Output = ForecastPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'f> IntoIterator for &'f Forecast<'_> {
    type Item = &'f ForecastPoint;
    type IntoIter = std::slice::Iter<'f, ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
