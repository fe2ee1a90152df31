//! Process-local [`FacilityStore`] used when no database is configured and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use spacebook_core::{
    errors::FacilityResult,
    models::facility::{Facility, FacilityFields},
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{parse_facility_id, FacilityStore};

/// Keeps facilities in a map keyed by UUID.
///
/// Identifier rules match [`crate::PgFacilityStore`], so a malformed id fails
/// the same way against either backend.
#[derive(Default)]
pub struct InMemoryFacilityStore {
    records: RwLock<HashMap<Uuid, Facility>>,
}

impl InMemoryFacilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn build(id: Uuid, fields: FacilityFields) -> Facility {
    Facility {
        id: id.to_string(),
        name: fields.name,
        description: fields.description,
        available_times: fields.available_times,
    }
}

#[async_trait]
impl FacilityStore for InMemoryFacilityStore {
    async fn get(&self, id: &str) -> FacilityResult<Option<Facility>> {
        let id = parse_facility_id(id)?;
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn create(&self, fields: FacilityFields) -> FacilityResult<Facility> {
        let id = Uuid::new_v4();
        let facility = build(id, fields);
        self.records.write().await.insert(id, facility.clone());
        Ok(facility)
    }

    async fn replace(&self, id: &str, fields: FacilityFields) -> FacilityResult<Option<Facility>> {
        let id = parse_facility_id(id)?;
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(existing) => {
                *existing = build(id, fields);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> FacilityResult<bool> {
        let id = parse_facility_id(id)?;
        Ok(self.records.write().await.remove(&id).is_some())
    }
}
