//! Filter fields and the active filter mapping.

use std::collections::BTreeMap;
use std::fmt;

/// The fixed set of filterable fields.
///
/// Declaration order is display order and query-string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FilterField {
    #[default]
    Name,
    VehicleNumber,
    Origin,
    DestinationName,
    TrackingMode,
    Status,
    ExtraStatus,
}

impl FilterField {
    pub const ALL: [FilterField; 7] = [
        FilterField::Name,
        FilterField::VehicleNumber,
        FilterField::Origin,
        FilterField::DestinationName,
        FilterField::TrackingMode,
        FilterField::Status,
        FilterField::ExtraStatus,
    ];

    /// Query-string key, identical to the record's JSON field name.
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::VehicleNumber => "vehicle_number",
            FilterField::Origin => "origin",
            FilterField::DestinationName => "destination_name",
            FilterField::TrackingMode => "tracking_mode",
            FilterField::Status => "status",
            FilterField::ExtraStatus => "extra_status",
        }
    }

    /// Look up a field by its query-string key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Input label: first underscore becomes a space, then uppercased.
    pub fn label(self) -> String {
        self.key().replacen('_', " ", 1).to_uppercase()
    }

    pub fn placeholder(self) -> String {
        format!("Filter by {}", self.key())
    }

    /// Position in [`FilterField::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field → substring filters.
///
/// Only non-empty values are stored: setting a field to `""` removes it, so
/// an empty string and an absent filter are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterMap {
    entries: BTreeMap<FilterField, String>,
}

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter value; an empty value clears the field.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.entries.remove(&field);
        } else {
            self.entries.insert(field, value);
        }
    }

    /// Builder-style [`FilterMap::set`].
    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Remove one field. Returns whether it was present.
    pub fn remove(&mut self, field: FilterField) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Active filters in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Last active field in display order.
    pub fn last_field(&self) -> Option<FilterField> {
        self.entries.keys().next_back().copied()
    }

    /// Case-insensitive substring match of every filter against `text_of(field)`.
    pub fn matches<'a>(&self, text_of: impl Fn(FilterField) -> &'a str) -> bool {
        self.iter().all(|(field, needle)| {
            text_of(field)
                .to_lowercase()
                .contains(&needle.to_lowercase())
        })
    }
}
