use std::fmt;

/// The sampling interval of a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One point per calendar day.
    Daily,
    /// One point every three hours.
    ThreeHourly,
    /// One point every hour.
    Hourly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Daily,
        Granularity::ThreeHourly,
        Granularity::Hourly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::ThreeHourly => "3-hourly",
            Granularity::Hourly => "hourly",
        }
    }
}

/// Formats a `Granularity` using its label.
///
/// # Examples
///
/// ```
/// use cliweather::Granularity;
///
/// assert_eq!(Granularity::ThreeHourly.to_string(), "3-hourly");
/// ```
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
