//! tripboard
//!
//! TUI for browsing paginated, filterable trip records served by a JSON API.
//!
//! The crate follows a Pure Core / Impure Shell split: `model` and `state`
//! hold data and transitions with no I/O, `fetch` talks to the API on
//! background threads, and `view` owns the terminal and the event loop.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
