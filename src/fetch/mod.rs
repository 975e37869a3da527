//! Trip API access (impure).
//!
//! - [`TripQuery`]: the by-value key of a request
//! - [`TripClient`] / [`HttpTripClient`]: one blocking GET per page
//! - [`Fetcher`]: runs requests in the background and drops superseded responses

pub mod client;
pub mod fetcher;
pub mod query;

pub use client::{HttpTripClient, TripClient};
pub use fetcher::{FetchOutcome, Fetcher, RequestSeq};
pub use query::{TripQuery, ROWS_PER_PAGE};
