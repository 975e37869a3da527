//! Request parameters for one page of trips.

use crate::model::FilterMap;

/// Rows requested per page. Fixed; not user-configurable.
pub const ROWS_PER_PAGE: u32 = 10;

/// Everything that determines which page the server returns.
///
/// Two queries that compare equal produce the same request, which is what the
/// event loop relies on to decide whether a refetch is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripQuery {
    pub page: u32,
    pub limit: u32,
    pub filters: FilterMap,
}

impl TripQuery {
    pub fn new(page: u32, filters: FilterMap) -> Self {
        Self {
            page,
            limit: ROWS_PER_PAGE,
            filters,
        }
    }

    /// Query parameters in request order: `page`, `limit`, then every
    /// non-empty filter in field order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2 + self.filters.len());
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs.extend(
            self.filters
                .iter()
                .map(|(field, value)| (field.key(), value.to_string())),
        );
        pairs
    }
}
