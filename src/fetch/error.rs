use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    /// The HTTP status of a non-success response, if the failure was one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            FetchError::NetworkRequest(_, source) => source.status(),
            FetchError::ClientBuild(_) => None,
        }
    }
}
