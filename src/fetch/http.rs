use crate::fetch::error::FetchError;
use crate::fetch::Fetcher;
use bon::bon;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("cliweather/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP implementation of [`Fetcher`].
///
/// Every request is bounded by the configured timeout, so a hung upstream
/// surfaces as [`FetchError::NetworkRequest`] instead of blocking forever.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

#[bon]
impl HttpFetcher {
    /// Builds a fetcher.
    ///
    /// * `.timeout(Duration)`: Optional. Whole-request timeout. Defaults to 30 seconds.
    /// * `.user_agent(String)`: Optional. Defaults to `cliweather/<version>`.
    ///
    /// ```no_run
    /// # use cliweather::HttpFetcher;
    /// # use std::time::Duration;
    /// let fetcher = HttpFetcher::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok::<(), cliweather::FetchError>(())
    /// ```
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
        #[builder(into, default = DEFAULT_USER_AGENT.to_string())] user_agent: String,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!("Downloading {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error for {}: {}", url, status);
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let fetcher = HttpFetcher::builder().build();
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_builder_custom_settings() {
        let fetcher = HttpFetcher::builder()
            .timeout(Duration::from_millis(500))
            .user_agent("cliweather-tests")
            .build();
        assert!(fetcher.is_ok());
    }
}
