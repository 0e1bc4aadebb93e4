use anyhow::{bail, Context, Result};
use cliweather::WeatherClient;

fn main() -> Result<()> {
    env_logger::init();

    let name = std::env::args()
        .nth(1)
        .context("usage: station_forecast <NAME>")?;

    let mut client = WeatherClient::dwd()?;
    client
        .load_stations()
        .context("Station list could not be loaded. Try again.")?;

    if client.find_stations(&name).is_empty() {
        bail!("Station not found: {name}");
    }

    let batch = client.forecasts_for(&name);
    for forecasts in &batch.forecasts {
        let station = forecasts.station();
        println!("Vorhersage für {} ({}):", station.name, station.code);
        println!("{}", forecasts.daily.day_summary());
    }

    let unsupported: Vec<_> = batch.unsupported().collect();
    if !unsupported.is_empty() {
        println!("These stations were not shown, because they are not supported:");
        for station in unsupported {
            println!("  {} ({})", station.name, station.code);
        }
    }
    for (station, err) in batch
        .failed
        .iter()
        .filter(|(_, err)| !matches!(err, cliweather::WeatherError::StationUnsupported { .. }))
    {
        eprintln!("Failed to load {} ({}): {err}", station.name, station.code);
    }

    Ok(())
}
