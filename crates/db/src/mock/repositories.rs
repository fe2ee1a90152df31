use async_trait::async_trait;
use mockall::mock;
use spacebook_core::{
    errors::FacilityResult,
    models::facility::{Facility, FacilityFields},
};

use crate::store::FacilityStore;

// Mock store for testing failure paths the real backends cannot easily produce
mock! {
    pub FacilityStore {}

    #[async_trait]
    impl FacilityStore for FacilityStore {
        async fn get(&self, id: &str) -> FacilityResult<Option<Facility>>;

        async fn create(&self, fields: FacilityFields) -> FacilityResult<Facility>;

        async fn replace(
            &self,
            id: &str,
            fields: FacilityFields,
        ) -> FacilityResult<Option<Facility>>;

        async fn delete(&self, id: &str) -> FacilityResult<bool>;
    }
}
