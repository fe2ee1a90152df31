use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spacebook_core::models::{facility::Facility, time_window::TimeWindow};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbFacility {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available_times: Json<Vec<TimeWindow>>,
    pub created_at: DateTime<Utc>,
}

impl From<DbFacility> for Facility {
    fn from(row: DbFacility) -> Self {
        Facility {
            id: row.id.to_string(),
            name: row.name,
            description: row.description,
            available_times: row.available_times.0,
        }
    }
}
