use async_trait::async_trait;
use eyre::{Result, WrapErr};
use spacebook_core::{
    errors::FacilityResult,
    models::facility::{Facility, FacilityFields},
};
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    models::DbFacility,
    store::{parse_facility_id, FacilityStore},
};

pub async fn create_facility(pool: &Pool<Postgres>, fields: &FacilityFields) -> Result<DbFacility> {
    let id = Uuid::new_v4();

    tracing::debug!(id = %id, "Creating facility");

    let facility = sqlx::query_as::<_, DbFacility>(
        r#"
        INSERT INTO facilities (id, name, description, available_times, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, name, description, available_times, created_at
        "#,
    )
    .bind(id)
    .bind(fields.name.as_deref())
    .bind(fields.description.as_deref())
    .bind(Json(&fields.available_times))
    .fetch_one(pool)
    .await?;

    Ok(facility)
}

pub async fn get_facility_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbFacility>> {
    let facility = sqlx::query_as::<_, DbFacility>(
        r#"
        SELECT id, name, description, available_times, created_at
        FROM facilities
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if facility.is_none() {
        tracing::debug!(id = %id, "Facility not found");
    }

    Ok(facility)
}

pub async fn replace_facility(
    pool: &Pool<Postgres>,
    id: Uuid,
    fields: &FacilityFields,
) -> Result<Option<DbFacility>> {
    let facility = sqlx::query_as::<_, DbFacility>(
        r#"
        UPDATE facilities
        SET name = $2, description = $3, available_times = $4
        WHERE id = $1
        RETURNING id, name, description, available_times, created_at
        "#,
    )
    .bind(id)
    .bind(fields.name.as_deref())
    .bind(fields.description.as_deref())
    .bind(Json(&fields.available_times))
    .fetch_optional(pool)
    .await?;

    Ok(facility)
}

pub async fn delete_facility(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM facilities
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// PostgreSQL-backed [`FacilityStore`].
#[derive(Clone)]
pub struct PgFacilityStore {
    pool: Pool<Postgres>,
}

impl PgFacilityStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FacilityStore for PgFacilityStore {
    async fn get(&self, id: &str) -> FacilityResult<Option<Facility>> {
        let id = parse_facility_id(id)?;
        let facility = get_facility_by_id(&self.pool, id)
            .await
            .wrap_err("Failed to load facility")?;
        Ok(facility.map(Facility::from))
    }

    async fn create(&self, fields: FacilityFields) -> FacilityResult<Facility> {
        let facility = create_facility(&self.pool, &fields)
            .await
            .wrap_err("Failed to insert facility")?;
        Ok(facility.into())
    }

    async fn replace(&self, id: &str, fields: FacilityFields) -> FacilityResult<Option<Facility>> {
        let id = parse_facility_id(id)?;
        let facility = replace_facility(&self.pool, id, &fields)
            .await
            .wrap_err("Failed to replace facility")?;
        Ok(facility.map(Facility::from))
    }

    async fn delete(&self, id: &str) -> FacilityResult<bool> {
        let id = parse_facility_id(id)?;
        let deleted = delete_facility(&self.pool, id)
            .await
            .wrap_err("Failed to delete facility")?;
        Ok(deleted)
    }
}
