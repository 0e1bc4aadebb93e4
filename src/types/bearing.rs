//! Wind direction as a compass bearing.

use std::fmt;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// A compass bearing in degrees, normalized to `[0, 360)`.
///
/// 0° is north and angles grow clockwise, which is the meteorological
/// convention for the direction the wind is blowing *from*.
///
/// # Examples
///
/// ```
/// use cliweather::Bearing;
///
/// let west = Bearing::from_degrees(-90.0);
/// assert_eq!(west.degrees(), 270.0);
/// assert_eq!(west.cardinal(), "W");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bearing {
    degrees: f64,
}

impl Bearing {
    pub fn from_degrees(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        let degrees = if normalized >= 360.0 { 0.0 } else { normalized };
        Self { degrees }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    /// The nearest of the 16 compass points, e.g. `"NNE"`.
    pub fn cardinal(&self) -> &'static str {
        let sector = ((self.degrees / 22.5).round() as usize) % COMPASS_POINTS.len();
        COMPASS_POINTS[sector]
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}° {}", self.degrees, self.cardinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_into_range() {
        assert_eq!(Bearing::from_degrees(360.0).degrees(), 0.0);
        assert_eq!(Bearing::from_degrees(450.0).degrees(), 90.0);
        assert_eq!(Bearing::from_degrees(-45.0).degrees(), 315.0);
        assert_eq!(Bearing::from_degrees(123.4).degrees(), 123.4);
    }

    #[test]
    fn test_radians_use_real_pi() {
        let south = Bearing::from_degrees(180.0);
        assert!((south.radians() - std::f64::consts::PI).abs() < 1e-12);
        let back = Bearing::from_radians(std::f64::consts::FRAC_PI_2);
        assert!((back.degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_cardinal_sectors() {
        assert_eq!(Bearing::from_degrees(0.0).cardinal(), "N");
        assert_eq!(Bearing::from_degrees(11.0).cardinal(), "N");
        assert_eq!(Bearing::from_degrees(12.0).cardinal(), "NNE");
        assert_eq!(Bearing::from_degrees(225.0).cardinal(), "SW");
        assert_eq!(Bearing::from_degrees(350.0).cardinal(), "N");
    }

    #[test]
    fn test_display() {
        assert_eq!(Bearing::from_degrees(270.0).to_string(), "270° W");
    }
}
