//! The persistence contract the facility service is written against.

use async_trait::async_trait;
use spacebook_core::{
    errors::{FacilityError, FacilityResult},
    models::facility::{Facility, FacilityFields},
};
use uuid::Uuid;

/// CRUD-by-identifier access to facility records.
///
/// Identifiers are opaque strings at this boundary. Each implementation
/// decides what a well-formed identifier looks like and must answer a
/// malformed one with [`FacilityError::InvalidIdentifier`], never with an
/// empty result.
#[async_trait]
pub trait FacilityStore: Send + Sync {
    async fn get(&self, id: &str) -> FacilityResult<Option<Facility>>;

    async fn create(&self, fields: FacilityFields) -> FacilityResult<Facility>;

    /// Overwrites every stored field of the record. Returns `None` when no
    /// record has this identifier.
    async fn replace(&self, id: &str, fields: FacilityFields) -> FacilityResult<Option<Facility>>;

    async fn delete(&self, id: &str) -> FacilityResult<bool>;
}

/// Parses the textual identifier used by the UUID-keyed stores.
pub fn parse_facility_id(id: &str) -> FacilityResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| FacilityError::invalid_identifier(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_facility_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_identifier() {
        for raw in ["", "not-a-uuid", "507f1f77bcf86cd799439011"] {
            match parse_facility_id(raw) {
                Err(FacilityError::InvalidIdentifier(_)) => {}
                other => panic!("Expected InvalidIdentifier for {:?}, got: {:?}", raw, other),
            }
        }
    }
}
