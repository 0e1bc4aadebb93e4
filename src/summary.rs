//! Plain-text summaries of stations and forecasts.
//!
//! Labels are German, matching the DWD station names they are shown next to.
//! A missing measurement is printed as `-`.

use crate::types::forecast::Forecast;
use crate::types::forecast_point::ForecastPoint;
use crate::types::station::WeatherStation;

const MISSING: &str = "-";

fn value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value} {unit}"),
        None => MISSING.to_string(),
    }
}

impl ForecastPoint {
    /// Time of day, temperature, rain, sunshine and wind.
    ///
    /// ```
    /// # use chrono::{TimeZone, Utc};
    /// # use cliweather::ForecastPoint;
    /// let point = ForecastPoint::builder()
    ///     .timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0).unwrap())
    ///     .temperature(12.5)
    ///     .build();
    /// assert!(point.summary().starts_with("15:00:00 Uhr:\nTemp.:\t12.5 °C\nRegen:\t-\n"));
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "{} Uhr:\nTemp.:\t{}\nRegen:\t{}\nSonne:\t{}\nWind:\t{}\n",
            self.timestamp.format("%H:%M:%S"),
            value(self.temperature, "°C"),
            value(self.precipitation, "mm"),
            value(self.sunshine_minutes(), "min"),
            value(self.wind_speed, "km/h"),
        )
    }

    /// Date, temperature range, rain, sunshine and wind.
    pub fn day_summary(&self) -> String {
        format!(
            "{}:\n\
             Temp. min: {}\n\
             Temp. max: {}\n\
             Regen:     {}\n\
             Sonne:     {}\n\
             Wind:      {}\n",
            self.timestamp.format("%Y-%m-%d"),
            value(self.temperature_min, "°C"),
            value(self.temperature_max, "°C"),
            value(self.precipitation, "mm"),
            value(self.sunshine_minutes(), "min"),
            value(self.wind_speed, "km/h"),
        )
    }
}

impl WeatherStation {
    pub fn summary(&self) -> String {
        format!(
            "{}\nCode: {}\nProvider: {}\n",
            self.name, self.code, self.provider.short_name
        )
    }
}

impl Forecast<'_> {
    /// Point summaries separated by blank lines.
    pub fn summary(&self) -> String {
        self.join(ForecastPoint::summary)
    }

    /// Day summaries separated by blank lines.
    pub fn day_summary(&self) -> String {
        self.join(ForecastPoint::day_summary)
    }

    fn join(&self, render: fn(&ForecastPoint) -> String) -> String {
        self.iter().map(render).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::dwd::DWD_INFO;
    use crate::types::position::Position2D;
    use chrono::{TimeDelta, TimeZone, Utc};

    fn point(day: u32) -> ForecastPoint {
        ForecastPoint::builder()
            .timestamp(Utc.with_ymd_and_hms(2024, 5, day, 6, 30, 0).unwrap())
            .temperature(10.0)
            .temperature_min(5.0)
            .temperature_max(15.5)
            .precipitation(1.2)
            .sunshine(TimeDelta::seconds(90))
            .build()
    }

    #[test]
    fn test_point_summary() {
        assert_eq!(
            point(1).summary(),
            "06:30:00 Uhr:\nTemp.:\t10 °C\nRegen:\t1.2 mm\nSonne:\t1.5 min\nWind:\t-\n"
        );
    }

    #[test]
    fn test_day_summary() {
        assert_eq!(
            point(1).day_summary(),
            "2024-05-01:\n\
             Temp. min: 5 °C\n\
             Temp. max: 15.5 °C\n\
             Regen:     1.2 mm\n\
             Sonne:     1.5 min\n\
             Wind:      -\n"
        );
    }

    #[test]
    fn test_station_summary() {
        let station = WeatherStation::new("Darmstadt", "L886", &DWD_INFO, Position2D::default());
        assert_eq!(station.summary(), "Darmstadt\nCode: L886\nProvider: DWD\n");
    }

    #[test]
    fn test_forecast_summary_separates_points() {
        let station = WeatherStation::new("Darmstadt", "L886", &DWD_INFO, Position2D::default());
        let mut forecast = Forecast::new(&station, TimeDelta::days(1), point(1).timestamp);
        assert_eq!(forecast.day_summary(), "");

        forecast.insert(point(1));
        forecast.insert(point(2));
        let text = forecast.day_summary();
        assert_eq!(text.matches("\n\n").count(), 1);
        assert!(text.starts_with("2024-05-01:"));
        assert!(text.contains("\n\n2024-05-02:"));
        assert_eq!(forecast.summary().matches(" Uhr:").count(), 2);
    }
}
