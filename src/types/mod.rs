pub mod bearing;
pub mod forecast;
pub mod forecast_point;
pub mod granularity;
pub mod position;
pub mod station;
