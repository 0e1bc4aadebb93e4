use crate::fetch::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// The station list or forecast resource could not be retrieved.
    #[error(transparent)]
    SourceUnavailable(#[from] FetchError),

    /// The station is known, but the provider publishes no automated forecast for it.
    #[error("Station '{code}' is not supported by the provider (no forecast data)")]
    StationUnsupported { code: String },

    #[error("Malformed payload for {context}: {reason}")]
    MalformedPayload { context: String, reason: String },
}

impl WeatherError {
    pub(crate) fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        WeatherError::MalformedPayload {
            context: context.into(),
            reason: reason.into(),
        }
    }
}
