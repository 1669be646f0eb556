use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::holidayerror::FetchError;

/// Retrieves the raw text of a feed.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Plain blocking `GET`, one attempt per call.
pub struct HttpFetcher {
    client: reqwest::blocking::Client
}

impl HttpFetcher {
    /// `timeout` of `None` leaves the client's default in place.
    pub fn new(timeout: Option<Duration>) -> Result<HttpFetcher, FetchError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|error| FetchError::new("", format!("cannot build HTTP client: {}", error)))?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching holiday feed");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| FetchError::new(url, error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(url, format!("HTTP status {}", status)));
        }
        response.text().map_err(|error| FetchError::new(url, error))
    }
}
