use serde::{Deserialize, Serialize};

/// Device-resolved coordinates for a delivery point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Delivery location, populated by manual entry or a one-shot device lookup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TransportLocation {
    pub address: String,
    pub landmark: Option<String>,
    pub coordinates: Option<GeoPoint>,
}

impl TransportLocation {
    /// A cost estimate needs either an address or resolved coordinates.
    pub fn is_resolvable(&self) -> bool {
        !self.address.trim().is_empty() || self.coordinates.is_some()
    }
}

/// Immutable transport cost snapshot returned by the estimator.
///
/// Any edit to the location or the item list invalidates a held quote;
/// the workflow layer enforces the re-fetch before submission.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransportQuote {
    pub distance_km: f64,
    pub base_charge: f64,
    pub gst_amount: f64,
    pub total_transport_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolvable_with_address_or_coordinates() {
        let mut location = TransportLocation::default();
        assert!(!location.is_resolvable());

        location.address = "Test St".into();
        assert!(location.is_resolvable());

        location.address.clear();
        location.coordinates = Some(GeoPoint {
            lat: 18.52,
            lng: 73.86,
        });
        assert!(location.is_resolvable());
    }
}
