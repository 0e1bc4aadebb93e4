//! Normalization of DWD forecast payloads into [`Forecast`] series.

use crate::error::WeatherError;
use crate::providers::dwd::payload::{DayRecord, SeriesRecord, StationOverview, StationPayload};
use crate::providers::StationForecasts;
use crate::types::bearing::Bearing;
use crate::types::forecast::Forecast;
use crate::types::forecast_point::ForecastPoint;
use crate::types::station::WeatherStation;
use crate::units::{minutes_to_duration, round_to_tenth, unscale, unscale_at, DWD_SCALE};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use log::{debug, warn};

/// Extracts the payload of `station` from a raw `stationOverviewExtended` body.
///
/// An empty response (`{}`, `null`, or an entry without any series) means the
/// station publishes no automated forecast and yields
/// [`WeatherError::StationUnsupported`].
pub fn parse_station_payload(
    body: &[u8],
    station: &WeatherStation,
) -> Result<StationPayload, WeatherError> {
    let context = || format!("forecast of station {}", station.code);

    let overview: Option<StationOverview> = serde_json::from_slice(body)
        .map_err(|e| WeatherError::malformed(context(), e.to_string()))?;

    let Some(mut overview) = overview.filter(|entries| !entries.is_empty()) else {
        warn!("Station {} returned an empty forecast payload", station.code);
        return Err(WeatherError::StationUnsupported {
            code: station.code.clone(),
        });
    };

    match overview.remove(&station.code) {
        Some(Some(payload)) if !payload.is_empty() => Ok(payload),
        Some(_) => {
            warn!("Station {} has no forecast series", station.code);
            Err(WeatherError::StationUnsupported {
                code: station.code.clone(),
            })
        }
        None => Err(WeatherError::malformed(
            context(),
            "response does not contain the requested station code",
        )),
    }
}

/// Builds the daily, 3-hourly and hourly forecasts from a station payload.
pub fn station_forecasts<'a>(
    payload: &StationPayload,
    station: &'a WeatherStation,
    today: DateTime<Utc>,
) -> Result<StationForecasts<'a>, WeatherError> {
    let missing = |member: &str| {
        WeatherError::malformed(
            format!("forecast of station {}", station.code),
            format!("missing '{member}' member"),
        )
    };

    let days = payload.days.as_deref().ok_or_else(|| missing("days"))?;
    let three_hourly = payload.forecast2.as_ref().ok_or_else(|| missing("forecast2"))?;
    let hourly = payload.forecast1.as_ref().ok_or_else(|| missing("forecast1"))?;

    Ok(StationForecasts {
        daily: day_forecast(days, station, today)?,
        three_hourly: list_forecast(three_hourly, station)?,
        hourly: list_forecast(hourly, station)?,
    })
}

/// Builds the daily forecast.
///
/// The time offset is `today` (the caller's wall clock), not the first
/// `dayDate` of the payload, so it can disagree with the first point.
pub fn day_forecast<'a>(
    days: &[DayRecord],
    station: &'a WeatherStation,
    today: DateTime<Utc>,
) -> Result<Forecast<'a>, WeatherError> {
    let mut forecast = Forecast::with_capacity(station, TimeDelta::days(1), today, days.len());

    for (index, day) in days.iter().enumerate() {
        let timestamp = parse_day_date(day.day_date.as_deref()).ok_or_else(|| {
            WeatherError::malformed(
                format!("daily forecast of station {}", station.code),
                format!("day {index} has a missing or invalid 'dayDate'"),
            )
        })?;

        let temperature_min = unscale(day.temperature_min, DWD_SCALE);
        let temperature_max = unscale(day.temperature_max, DWD_SCALE);
        let temperature = temperature_min
            .zip(temperature_max)
            .map(|(min, max)| round_to_tenth((max + min) / 2.0));

        let point = ForecastPoint::builder()
            .timestamp(timestamp)
            .maybe_temperature(temperature)
            .maybe_temperature_min(temperature_min)
            .maybe_temperature_max(temperature_max)
            .maybe_precipitation(unscale(day.precipitation, DWD_SCALE))
            .maybe_wind_speed(unscale(day.wind_speed, DWD_SCALE))
            .maybe_wind_direction(unscale(day.wind_direction, DWD_SCALE).map(Bearing::from_degrees))
            .maybe_wind_gust(unscale(day.wind_gust, DWD_SCALE))
            .maybe_sunshine(unscale(day.sunshine, DWD_SCALE).and_then(minutes_to_duration))
            .build();

        forecast.insert(point);
    }

    debug!(
        "Daily forecast for {}: {} points",
        station.code,
        forecast.len()
    );
    Ok(forecast)
}

/// Builds a forecast from a list-based series (`forecast1` or `forecast2`).
///
/// The `sunshine` array decides the number of points, and its last sample is
/// not used: `len - 1` points are produced (indices `0..len-1`). Every other
/// measurement is looked up in its own array by index and is absent when that
/// array is missing, shorter, or holds `null` there.
pub fn list_forecast<'a>(
    series: &SeriesRecord,
    station: &'a WeatherStation,
) -> Result<Forecast<'a>, WeatherError> {
    let context = || format!("list forecast of station {}", station.code);

    let start = series
        .start
        .ok_or_else(|| WeatherError::malformed(context(), "missing 'start'"))?;
    let step = series
        .time_step
        .ok_or_else(|| WeatherError::malformed(context(), "missing 'timeStep'"))?;

    let time_offset = DateTime::from_timestamp_millis(start)
        .ok_or_else(|| WeatherError::malformed(context(), format!("start {start} out of range")))?;
    let time_resolution = TimeDelta::try_milliseconds(step)
        .ok_or_else(|| WeatherError::malformed(context(), format!("timeStep {step} out of range")))?;

    let count = series.sunshine.as_ref().map_or(0, Vec::len).saturating_sub(1);
    let mut forecast = Forecast::with_capacity(station, time_resolution, time_offset, count);

    for index in 0..count {
        let timestamp = i32::try_from(index)
            .ok()
            .and_then(|i| time_resolution.checked_mul(i))
            .and_then(|elapsed| time_offset.checked_add_signed(elapsed))
            .ok_or_else(|| {
                WeatherError::malformed(context(), format!("timestamp of sample {index} overflows"))
            })?;

        let at = |values: &Option<Vec<Option<f64>>>| unscale_at(values.as_deref(), index, DWD_SCALE);

        let point = ForecastPoint::builder()
            .timestamp(timestamp)
            .maybe_dew_point(at(&series.dew_point2m))
            .maybe_air_humidity(at(&series.humidity))
            .maybe_precipitation(at(&series.precipitation_total))
            .maybe_sunshine(at(&series.sunshine).and_then(minutes_to_duration))
            .maybe_air_pressure(at(&series.surface_pressure))
            .maybe_temperature(at(&series.temperature))
            .maybe_wind_direction(at(&series.wind_direction).map(Bearing::from_degrees))
            .maybe_wind_speed(at(&series.wind_speed))
            .maybe_wind_gust(at(&series.wind_gust))
            .build();

        forecast.insert(point);
    }

    debug!(
        "List forecast for {} (step {}s): {} points",
        station.code,
        time_resolution.num_seconds(),
        forecast.len()
    );
    Ok(forecast)
}

fn parse_day_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.with_timezone(&Utc))
}
