//! Error types for tripboard.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`FetchError`] - Trip API failures (transport, HTTP status, malformed body)
//!
//! # Error Recovery Strategy
//!
//! Fetch errors are **non-fatal**: the failure is logged, the loading flag is
//! cleared, and the table keeps whatever rows it had. There is no retry. Terminal
//! errors are fatal and propagate to `main`.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// A trip page could not be fetched or decoded.
    ///
    /// Only surfaces as an `AppError` when a caller chooses to treat it as
    /// fatal; the event loop itself logs and continues.
    #[error("Failed to fetch trips: {0}")]
    Fetch(#[from] FetchError),
}

/// Errors encountered when requesting a page of trips.
///
/// The variants are distinguished so the status bar and the log can say
/// what went wrong, but all three are handled the same way by the event loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The configured API URL cannot be parsed.
    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl {
        /// The URL as configured.
        url: String,
        /// Parser message.
        message: String,
    },

    /// The request never produced a response (DNS, connection refused, timeout).
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// The full request URL including the query string.
        url: String,
        /// Transport-level error message.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("Server returned HTTP {status} for {url}")]
    Status {
        /// The full request URL including the query string.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not JSON, or did not match the expected page shape.
    ///
    /// The expected shape is
    /// `{ "data": [Trip, ...], "pagination": { "totalPages": n, "currentPage": n } }`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripboard::model::error::FetchError;
    ///
    /// let err = FetchError::MalformedResponse {
    ///     message: "missing field `pagination`".to_string(),
    /// };
    /// assert!(err.to_string().contains("pagination"));
    /// ```
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Decoder message describing the first mismatch.
        message: String,
    },
}

impl FetchError {
    /// Build a `MalformedResponse` from a JSON decoding error.
    pub fn malformed(err: &serde_json::Error) -> Self {
        FetchError::MalformedResponse {
            message: err.to_string(),
        }
    }
}
