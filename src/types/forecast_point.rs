use crate::types::bearing::Bearing;
use bon::Builder;
use chrono::{DateTime, TimeDelta, Utc};

/// A point in time associated with a bundle of forecast values.
///
/// Only `timestamp` is required. Every measurement is optional: `None` means
/// the provider did not report it for this point, or the quantity does not
/// exist at this granularity (e.g. `temperature_min` on an hourly point).
///
/// Temperatures are in °C, precipitation in mm, speeds in km/h, pressure in
/// hPa and humidity in percent.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cliweather::ForecastPoint;
///
/// let point = ForecastPoint::builder()
///     .timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
///     .temperature(17.5)
///     .maybe_precipitation(None)
///     .build();
///
/// assert_eq!(point.temperature, Some(17.5));
/// assert_eq!(point.precipitation, None);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,

    pub temperature: Option<f64>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub precipitation: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<Bearing>,
    pub wind_gust: Option<f64>,
    pub air_pressure: Option<f64>,
    pub air_humidity: Option<f64>,
    pub dew_point: Option<f64>,
    /// Sunshine duration within the point's interval.
    pub sunshine: Option<TimeDelta>,
    pub uv_index: Option<f64>,
    pub cloud_coverage: Option<f64>,
}

impl ForecastPoint {
    /// A point carrying only its timestamp.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        ForecastPoint::builder().timestamp(timestamp).build()
    }

    /// Sunshine duration in (fractional) minutes.
    pub fn sunshine_minutes(&self) -> Option<f64> {
        self.sunshine
            .map(|duration| duration.num_milliseconds() as f64 / 60_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_builder_leaves_unset_fields_absent() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let point = ForecastPoint::builder()
            .timestamp(ts)
            .wind_speed(12.0)
            .wind_direction(Bearing::from_degrees(200.0))
            .sunshine(TimeDelta::minutes(90))
            .build();

        assert_eq!(point.timestamp, ts);
        assert_eq!(point.wind_speed, Some(12.0));
        assert_eq!(point.sunshine_minutes(), Some(90.0));
        assert_eq!(point.temperature, None);
        assert_eq!(point.uv_index, None);
        assert_eq!(point.cloud_coverage, None);
    }

    #[test]
    fn test_at_has_no_measurements() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
        let point = ForecastPoint::at(ts);
        assert_eq!(point, ForecastPoint::builder().timestamp(ts).build());
        assert_eq!(point.sunshine_minutes(), None);
    }
}
