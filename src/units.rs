//! Unit conversion and missing-value policy for fixed-point provider data.
//!
//! Providers encode measurements as integers scaled by a fixed decimal factor
//! (DWD uses tenths). These helpers undo the scaling and carry absence through
//! as `None`. A missing value is never replaced by a sentinel number.

use chrono::TimeDelta;

/// Scale factor of DWD's fixed-point fields (values are sent in tenths).
pub const DWD_SCALE: f64 = 10.0;

/// Converts a scaled raw value into its physical value.
///
/// # Examples
///
/// ```
/// use cliweather::units::unscale;
///
/// assert_eq!(unscale(Some(215.0), 10.0), Some(21.5));
/// assert_eq!(unscale(None, 10.0), None);
/// ```
pub fn unscale(raw: Option<f64>, scale: f64) -> Option<f64> {
    raw.map(|value| value / scale)
}

/// Looks up `index` in a parallel array and unscales it.
///
/// A missing array, an index beyond the array's current length and a `null`
/// element all give `None`. Upstream arrays may be shorter than the nominal
/// series length.
///
/// # Examples
///
/// ```
/// use cliweather::units::unscale_at;
///
/// let series = vec![Some(100.0), None];
/// assert_eq!(unscale_at(Some(&series), 0, 10.0), Some(10.0));
/// assert_eq!(unscale_at(Some(&series), 1, 10.0), None);
/// assert_eq!(unscale_at(Some(&series), 7, 10.0), None);
/// assert_eq!(unscale_at(None, 0, 10.0), None);
/// ```
pub fn unscale_at(series: Option<&[Option<f64>]>, index: usize, scale: f64) -> Option<f64> {
    unscale(series?.get(index).copied().flatten(), scale)
}

/// Rounds to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts fractional minutes into a duration with millisecond precision.
///
/// Non-finite values and values outside the range of [`TimeDelta`] give `None`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use cliweather::units::minutes_to_duration;
///
/// assert_eq!(minutes_to_duration(1.5), Some(TimeDelta::seconds(90)));
/// assert_eq!(minutes_to_duration(-1e300), None);
/// ```
pub fn minutes_to_duration(minutes: f64) -> Option<TimeDelta> {
    let millis = (minutes * 60_000.0).round();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64)
}
