use chrono::{TimeDelta, TimeZone, Utc};
use cliweather::{list_forecast, Forecast, ForecastPoint, Position2D, SeriesRecord, WeatherStation, DWD_INFO};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn series(len: usize) -> SeriesRecord {
    let values = || Some((0..len).map(|i| Some(i as f64)).collect());
    SeriesRecord {
        start: Some(1_714_521_600_000),
        time_step: Some(3_600_000),
        temperature: values(),
        wind_speed: values(),
        wind_direction: values(),
        wind_gust: values(),
        precipitation_total: values(),
        sunshine: values(),
        dew_point2m: values(),
        surface_pressure: values(),
        humidity: values(),
    }
}

fn bench_forecast(c: &mut Criterion) {
    let station = WeatherStation::new("Darmstadt", "L886", &DWD_INFO, Position2D::new(8.66, 49.88));
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let points: Vec<ForecastPoint> = (0..240)
        .map(|h| ForecastPoint::at(start + TimeDelta::hours(h)))
        .collect();

    c.bench_function("insert_240_ordered", |b| {
        b.iter(|| {
            let mut forecast = Forecast::new(&station, TimeDelta::hours(1), start);
            for point in &points {
                forecast.insert(black_box(point.clone()));
            }
            forecast
        })
    });

    c.bench_function("insert_sorted_240_reversed", |b| {
        b.iter(|| {
            let mut forecast = Forecast::new(&station, TimeDelta::hours(1), start);
            for point in points.iter().rev() {
                forecast.insert_sorted(black_box(point.clone()));
            }
            forecast
        })
    });

    let hourly = series(241);
    c.bench_function("list_forecast_hourly", |b| {
        b.iter(|| list_forecast(black_box(&hourly), &station))
    });
}

criterion_group!(benches, bench_forecast);
criterion_main!(benches);
