//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp` on a `TestBackend` against an
//! in-memory trip API, the way a user would.

mod acceptance_rows;
mod acceptance_shell;
mod property_tests;
