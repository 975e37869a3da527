//! Client-local "liked" trips.

use crate::model::TripKey;
use std::collections::HashSet;

/// Set of liked trip keys. Never persisted, never sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet {
    keys: HashSet<TripKey>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership. Returns whether the key is liked afterwards.
    pub fn toggle(&mut self, key: TripKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, key: &TripKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
