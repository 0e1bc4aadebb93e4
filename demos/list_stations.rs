use anyhow::Result;
use cliweather::WeatherClient;

fn main() -> Result<()> {
    // Set RUST_LOG=info (or debug) to see download and parsing messages.
    env_logger::init();

    let mut client = WeatherClient::dwd()?;
    let stations = client.load_stations()?;

    for station in stations {
        println!("{}", station.summary());
    }
    println!("{} stations", stations.len());

    Ok(())
}
