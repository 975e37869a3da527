//! Trip records as returned by the trip API.

use super::filter::FilterField;
use super::timestamp::Timestamp;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Status string that is displayed verbatim. Every other status collapses
/// to [`TripStatus::Enroute`].
pub const CONSENT_PENDING: &str = "Driver Consent Pending";

/// `extra_status` value that earns a "Delayed" badge.
pub const DELAYED: &str = "DELAYED";

/// One trip/shipment, one table row.
///
/// All string fields are required. `created_at` and `eta` must be ISO-8601.
/// Unknown fields in the JSON object are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trip {
    /// Stable identifier, when the API provides one.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    pub name: String,
    pub status: String,
    pub origin: String,
    pub destination_name: String,
    pub created_at: Timestamp,
    pub eta: Timestamp,
    pub vehicle_number: String,
    pub tracking_mode: String,
    pub driver_number: String,
    pub tel_operator: String,
    pub last_update: String,
    #[serde(default)]
    pub extra_status: Option<String>,
}

impl Trip {
    /// Identity used for like state.
    pub fn key(&self) -> TripKey {
        match &self.id {
            Some(id) => TripKey::Id(id.clone()),
            None => TripKey::Name(self.name.clone()),
        }
    }

    /// Display status (lossy two-way mapping).
    pub fn display_status(&self) -> TripStatus {
        TripStatus::from_raw(&self.status)
    }

    /// Whether the trip carries the `DELAYED` extra status.
    pub fn is_delayed(&self) -> bool {
        self.extra_status.as_deref() == Some(DELAYED)
    }

    /// Raw text of a filterable field. A missing `extra_status` reads as "".
    pub fn field_text(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::VehicleNumber => &self.vehicle_number,
            FilterField::Origin => &self.origin,
            FilterField::DestinationName => &self.destination_name,
            FilterField::TrackingMode => &self.tracking_mode,
            FilterField::Status => &self.status,
            FilterField::ExtraStatus => self.extra_status.as_deref().unwrap_or(""),
        }
    }
}

/// Identity of a trip for client-side state.
///
/// The API `id` is preferred. Without it the trip `name` is used, which is
/// ambiguous when names repeat across rows or pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TripKey {
    Id(String),
    Name(String),
}

impl fmt::Display for TripKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripKey::Id(id) => write!(f, "#{}", id),
            TripKey::Name(name) => f.write_str(name),
        }
    }
}

/// Displayed status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    ConsentPending,
    Enroute,
}

impl TripStatus {
    /// Exact match against [`CONSENT_PENDING`]; everything else is `Enroute`.
    pub fn from_raw(raw: &str) -> Self {
        if raw == CONSENT_PENDING {
            TripStatus::ConsentPending
        } else {
            TripStatus::Enroute
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TripStatus::ConsentPending => CONSENT_PENDING,
            TripStatus::Enroute => "Enroute to Destination",
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}


#[cfg(test)]
mod tests {
    use super::fixtures::trip;
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "name": "TRIP-001",
            "status": "Driver Consent Pending",
            "origin": "Mumbai",
            "destination_name": "Pune",
            "created_at": "2024-03-01T10:15:30Z",
            "eta": "2024-03-02T18:45:00Z",
            "vehicle_number": "MH12AB1234",
            "tracking_mode": "SIM",
            "driver_number": "9876543210",
            "tel_operator": "Airtel",
            "last_update": "Near Lonavala",
            "extra_status": "DELAYED",
            "unrelated": 42
        })
    }

    #[test]
    fn deserializes_complete_record_and_ignores_unknown_fields() {
        let trip: Trip = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(trip.name, "TRIP-001");
        assert_eq!(trip.id, None);
        assert!(trip.is_delayed());
        assert_eq!(trip.display_status(), TripStatus::ConsentPending);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("origin");
        let err = serde_json::from_value::<Trip>(value).unwrap_err();
        assert!(err.to_string().contains("origin"));
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let mut value = sample_json();
        value["eta"] = json!("soon");
        assert!(serde_json::from_value::<Trip>(value).is_err());
    }

    #[test]
    fn extra_status_may_be_null_or_absent() {
        let mut value = sample_json();
        value["extra_status"] = json!(null);
        let trip: Trip = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(trip.extra_status, None);

        value.as_object_mut().unwrap().remove("extra_status");
        let trip: Trip = serde_json::from_value(value).unwrap();
        assert!(!trip.is_delayed());
    }

    #[test]
    fn numeric_and_string_ids_are_both_accepted() {
        let mut value = sample_json();
        value["id"] = json!(17);
        let trip: Trip = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(trip.id.as_deref(), Some("17"));
        assert_eq!(trip.key(), TripKey::Id("17".to_string()));

        value["id"] = json!("abc-17");
        let trip: Trip = serde_json::from_value(value).unwrap();
        assert_eq!(trip.key(), TripKey::Id("abc-17".to_string()));
    }

    #[test]
    fn key_falls_back_to_name() {
        assert_eq!(trip("T1").key(), TripKey::Name("T1".to_string()));
    }

    #[test]
    fn status_label_only_preserves_exact_consent_pending() {
        assert_eq!(TripStatus::from_raw(CONSENT_PENDING).label(), CONSENT_PENDING);
        for other in ["", "driver consent pending", "Driver Consent Pending ", "Delivered"] {
            assert_eq!(
                TripStatus::from_raw(other).label(),
                "Enroute to Destination",
                "status {:?}",
                other
            );
        }
    }

    #[test]
    fn delayed_requires_exact_value() {
        let mut t = trip("T1");
        t.extra_status = Some("delayed".to_string());
        assert!(!t.is_delayed());
        t.extra_status = Some(DELAYED.to_string());
        assert!(t.is_delayed());
    }

    #[test]
    fn field_text_maps_each_filter_field() {
        let mut t = trip("T1");
        t.extra_status = Some("DELAYED".to_string());
        assert_eq!(t.field_text(FilterField::Name), "T1");
        assert_eq!(t.field_text(FilterField::VehicleNumber), "MH12AB1234");
        assert_eq!(t.field_text(FilterField::Origin), "Mumbai Central Warehouse");
        assert_eq!(t.field_text(FilterField::DestinationName), "Pune Distribution Hub");
        assert_eq!(t.field_text(FilterField::TrackingMode), "SIM");
        assert_eq!(t.field_text(FilterField::Status), "In Transit");
        assert_eq!(t.field_text(FilterField::ExtraStatus), "DELAYED");
    }
}
