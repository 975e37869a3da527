//! Paged API response.

use super::error::FetchError;
use super::trip::Trip;
use serde::Deserialize;

/// Pagination block of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_pages: u32,
    pub current_page: u32,
}

/// One page of trips: `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TripPage {
    pub data: Vec<Trip>,
    pub pagination: Pagination,
}

impl TripPage {
    /// Decode and validate a response body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MalformedResponse` when the body is not JSON, a
    /// required key is missing, or any record fails validation.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::malformed(&e))
    }
}
