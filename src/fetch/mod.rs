//! The transport seam between the providers and the network.
//!
//! Providers never talk to `reqwest` directly. They ask a [`Fetcher`] for the raw
//! bytes of a URL, which keeps payload decoding testable with canned responses.

pub mod error;
pub mod http;

use crate::fetch::error::FetchError;

/// Retrieves the raw body of a resource.
///
/// Implementations must return [`FetchError::HttpStatus`] for any non-success
/// status instead of handing back the error page body.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Fetcher;
    use crate::fetch::error::FetchError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned bodies per URL and records every request.
    #[derive(Default)]
    pub(crate) struct CannedFetcher {
        bodies: HashMap<String, Vec<u8>>,
        statuses: HashMap<String, reqwest::StatusCode>,
        pub(crate) requests: RefCell<Vec<String>>,
    }

    impl CannedFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
            self.bodies.insert(url.to_string(), body.into());
            self
        }

        pub(crate) fn with_status(mut self, url: &str, status: reqwest::StatusCode) -> Self {
            self.statuses.insert(url.to_string(), status);
            self
        }
    }

    impl Fetcher for CannedFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            if let Some(status) = self.statuses.get(url) {
                return Err(FetchError::HttpStatus {
                    url: url.to_string(),
                    status: *status,
                });
            }
            self.bodies
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::HttpStatus {
                    url: url.to_string(),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
        }
    }
}
