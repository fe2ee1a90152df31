//! # Facility domain operations
//!
//! [`FacilityService`] implements the six facility operations on top of any
//! [`FacilityStore`]. Each operation logs its outcome and returns a
//! [`FacilityResult`] whose error category is what callers translate into
//! their transport's status codes.
//!
//! Operations that change an existing facility read the whole record, modify
//! it in memory and write it back. Two concurrent writers to the same
//! facility therefore race, and the last replace wins.

use std::sync::Arc;

use spacebook_core::{
    errors::{FacilityError, FacilityResult},
    models::{
        facility::{Facility, FacilityFields},
        time_window::TimeWindow,
    },
};
use spacebook_db::FacilityStore;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct FacilityService {
    store: Arc<dyn FacilityStore>,
}

impl FacilityService {
    pub fn new(store: Arc<dyn FacilityStore>) -> Self {
        Self { store }
    }

    pub async fn create_facility(
        &self,
        name: Option<String>,
        description: Option<String>,
    ) -> FacilityResult<Facility> {
        match self.store.create(FacilityFields::new(name, description)).await {
            Ok(facility) => {
                info!(operation = "CreateFacility", id = %facility.id, "Facility created");
                Ok(facility)
            }
            Err(e) => {
                error!(operation = "CreateFacility", error = %e, "Error creating facility");
                Err(e.into_internal())
            }
        }
    }

    /// Unlike the mutating operations, a malformed identifier is reported
    /// here as [`FacilityError::InvalidIdentifier`].
    pub async fn get_facility(&self, id: &str) -> FacilityResult<Facility> {
        match self.store.get(id).await {
            Ok(Some(facility)) => {
                info!(operation = "GetFacility", id, "Retrieved facility");
                Ok(facility)
            }
            Ok(None) => {
                warn!(operation = "GetFacility", id, "Facility not found");
                Err(FacilityError::not_found(id))
            }
            Err(e) => {
                error!(operation = "GetFacility", id, error = %e, "Error fetching facility");
                Err(e)
            }
        }
    }

    /// Replaces name and description. The time windows are carried over untouched.
    pub async fn update_facility(
        &self,
        id: &str,
        name: Option<String>,
        description: Option<String>,
    ) -> FacilityResult<Facility> {
        let mut facility = match self.store.get(id).await {
            Ok(Some(facility)) => facility,
            Ok(None) => {
                warn!(operation = "UpdateFacility", id, "Facility not found for update");
                return Err(FacilityError::not_found(id));
            }
            Err(e) => {
                error!(operation = "UpdateFacility", id, error = %e, "Error updating facility");
                return Err(e);
            }
        };

        facility.name = name;
        facility.description = description;

        match self.store.replace(id, facility.fields()).await {
            Ok(Some(updated)) => {
                info!(operation = "UpdateFacility", id, "Updated facility");
                Ok(updated)
            }
            Ok(None) => {
                warn!(operation = "UpdateFacility", id, "Facility removed before update was written");
                Err(FacilityError::not_found(id))
            }
            Err(e) => {
                error!(operation = "UpdateFacility", id, error = %e, "Error updating facility");
                Err(e)
            }
        }
    }

    pub async fn delete_facility(&self, id: &str) -> FacilityResult<bool> {
        match self.store.delete(id).await {
            Ok(true) => {
                info!(operation = "DeleteFacility", id, "Deleted facility");
                Ok(true)
            }
            Ok(false) => {
                warn!(operation = "DeleteFacility", id, "Facility not found for deletion");
                Err(FacilityError::not_found(id))
            }
            Err(e) => {
                error!(operation = "DeleteFacility", id, error = %e, "Error deleting facility");
                Err(e.into_internal())
            }
        }
    }

    /// Appends `window` without checking for duplicates or overlaps.
    pub async fn add_available_time(
        &self,
        facility_id: &str,
        window: TimeWindow,
    ) -> FacilityResult<Facility> {
        let mut facility = self.load_for_change("AddAvailableTime", facility_id).await?;
        facility.push_window(window);

        let updated = self.write_back("AddAvailableTime", facility).await?;
        info!(
            operation = "AddAvailableTime",
            id = facility_id,
            windows = updated.available_times.len(),
            "Added available time"
        );
        Ok(updated)
    }

    /// Drops every window whose bounds equal `(start, end)`. Matching nothing
    /// still succeeds and rewrites the record unchanged.
    pub async fn remove_available_time(
        &self,
        facility_id: &str,
        start: &str,
        end: &str,
    ) -> FacilityResult<Facility> {
        let mut facility = self.load_for_change("RemoveAvailableTime", facility_id).await?;
        let removed = facility.remove_windows(start, end);

        let updated = self.write_back("RemoveAvailableTime", facility).await?;
        info!(
            operation = "RemoveAvailableTime",
            id = facility_id,
            removed,
            "Removed available time"
        );
        Ok(updated)
    }

    // Past the existence check every failure of a window change is Internal.
    async fn load_for_change(&self, operation: &'static str, id: &str) -> FacilityResult<Facility> {
        match self.store.get(id).await {
            Ok(Some(facility)) => Ok(facility),
            Ok(None) => {
                warn!(operation, id, "Facility not found");
                Err(FacilityError::not_found(id))
            }
            Err(e) => {
                error!(operation, id, error = %e, "Error loading facility");
                Err(e.into_internal())
            }
        }
    }

    async fn write_back(&self, operation: &'static str, facility: Facility) -> FacilityResult<Facility> {
        match self.store.replace(&facility.id, facility.fields()).await {
            Ok(Some(updated)) => Ok(updated),
            Ok(None) => {
                error!(operation, id = %facility.id, "Facility disappeared before it was saved");
                Err(FacilityError::Internal(eyre::eyre!(
                    "facility {} was deleted while being modified",
                    facility.id
                )))
            }
            Err(e) => {
                error!(operation, id = %facility.id, error = %e, "Error saving facility");
                Err(e.into_internal())
            }
        }
    }
}
