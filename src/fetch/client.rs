//! Trip API clients.

use super::query::TripQuery;
use crate::model::{FetchError, TripPage};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Source of trip pages.
///
/// Implementations are called from background threads, one call per request.
pub trait TripClient: Send + Sync + 'static {
    /// Fetch one page.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` for transport failures, non-success statuses and
    /// bodies that do not decode into a [`TripPage`].
    fn fetch(&self, query: &TripQuery) -> Result<TripPage, FetchError>;
}

/// HTTP client for `GET {api_url}?page=..&limit=..&field=value...`.
///
/// No auth headers, no body. Without a configured timeout a request can wait
/// indefinitely.
#[derive(Debug, Clone)]
pub struct HttpTripClient {
    http: reqwest::blocking::Client,
    base: Url,
}

impl HttpTripClient {
    /// Build a client for the given API URL.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if `api_url` does not parse, and
    /// `FetchError::Transport` if the HTTP client cannot be constructed.
    pub fn new(api_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let base = Url::parse(api_url).map_err(|e| FetchError::InvalidUrl {
            url: api_url.to_string(),
            message: e.to_string(),
        })?;

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                url: api_url.to_string(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { http, base })
    }

    /// Full request URL for a query.
    pub fn request_url(&self, query: &TripQuery) -> Url {
        let mut url = self.base.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, &value);
            }
        }
        url
    }
}

impl TripClient for HttpTripClient {
    fn fetch(&self, query: &TripQuery) -> Result<TripPage, FetchError> {
        let url = self.request_url(query);
        debug!(%url, "GET trips");

        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        TripPage::from_json(&body)
    }
}
