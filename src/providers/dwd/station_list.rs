//! Parsing of the DWD station lexicon (`statlex_rich.txt`).
//!
//! The lexicon is a whitespace-aligned ISO-8859-1 table with CRLF line endings,
//! three header lines and a trailing empty line. Relevant columns by token
//! position: 0 = name, 3 = station code, 4 = latitude, 5 = longitude.

use crate::providers::dwd::DWD_INFO;
use crate::types::position::Position2D;
use crate::types::station::WeatherStation;
use log::{debug, warn};
use std::collections::HashSet;

const HEADER_LINES: usize = 3;
const TOKEN_NAME: usize = 0;
const TOKEN_CODE: usize = 3;
const TOKEN_LATITUDE: usize = 4;
const TOKEN_LONGITUDE: usize = 5;

/// Decodes ISO-8859-1 bytes. Every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

/// Parses the lexicon text into stations, keeping the first occurrence of each code.
///
/// Lines that do not have enough columns or whose coordinates are not numeric
/// are skipped.
pub fn parse_station_list(text: &str) -> Vec<WeatherStation> {
    let lines: Vec<&str> = text.split("\r\n").collect();
    let body = lines
        .get(HEADER_LINES..lines.len().saturating_sub(1))
        .unwrap_or_default();

    let mut seen_codes = HashSet::new();
    let mut stations = Vec::with_capacity(body.len());

    for (offset, line) in body.iter().enumerate() {
        let line_number = offset + HEADER_LINES + 1;
        let Some(station) = parse_line(line, line_number) else {
            continue;
        };
        if seen_codes.insert(station.code.clone()) {
            stations.push(station);
        } else {
            debug!(
                "Discarding duplicate station code {} ('{}') on line {}",
                station.code, station.name, line_number
            );
        }
    }

    stations
}

fn parse_line(line: &str, line_number: usize) -> Option<WeatherStation> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    if tokens.len() <= TOKEN_LONGITUDE {
        warn!(
            "Skipping station line {}: expected at least {} columns, found {}",
            line_number,
            TOKEN_LONGITUDE + 1,
            tokens.len()
        );
        return None;
    }

    let latitude = tokens[TOKEN_LATITUDE].parse::<f64>();
    let longitude = tokens[TOKEN_LONGITUDE].parse::<f64>();
    let (Ok(latitude), Ok(longitude)) = (latitude, longitude) else {
        warn!(
            "Skipping station line {}: non-numeric coordinates '{}' / '{}'",
            line_number, tokens[TOKEN_LATITUDE], tokens[TOKEN_LONGITUDE]
        );
        return None;
    };

    Some(WeatherStation::new(
        tokens[TOKEN_NAME],
        tokens[TOKEN_CODE],
        &DWD_INFO,
        Position2D::new(longitude, latitude),
    ))
}
