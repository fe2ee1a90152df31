//! # Facility Handlers
//!
//! Each handler turns the HTTP request into one call on the facility gRPC
//! service and renders the reply with the same field set as JSON. Error
//! statuses are translated by [`AppError`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use spacebook_core::models::facility::{
    AddAvailableTimeRequest, CreateFacilityRequest, DeleteFacilityResponse,
    FacilityDetailResponse, FacilitySummaryResponse, RemoveAvailableTimeRequest,
    UpdateFacilityRequest,
};
use spacebook_facility::proto;
use std::sync::Arc;
use tracing::info;

use crate::{extract::JsonBody, middleware::error_handling::AppError, GatewayState};

/// Listing is not part of the facility gRPC contract, so this route answers
/// with a fixed placeholder.
pub async fn list_facilities() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "message": "List facilities endpoint - implement listFacilities in gRPC service"
        })),
    )
}

#[axum::debug_handler]
pub async fn get_facility(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<String>,
) -> Result<Json<FacilityDetailResponse>, AppError> {
    let mut client = state.facility_client.clone();

    let reply = client
        .get_facility(proto::GetFacilityRequest { id: id.clone() })
        .await
        .map_err(|status| AppError::rpc(status, "Failed to get facility"))?
        .into_inner();

    info!(operation = "GetFacility", id = %id, "Retrieved facility via web gateway");
    Ok(Json(reply.into()))
}

#[axum::debug_handler]
pub async fn create_facility(
    State(state): State<Arc<GatewayState>>,
    JsonBody(payload): JsonBody<CreateFacilityRequest>,
) -> Result<Json<FacilitySummaryResponse>, AppError> {
    let mut client = state.facility_client.clone();

    let reply = client
        .create_facility(proto::CreateFacilityRequest {
            name: payload.name.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
        })
        .await
        .map_err(|status| AppError::rpc(status, "Failed to create facility"))?
        .into_inner();

    info!(operation = "CreateFacility", id = %reply.id, "Created facility via web gateway");
    Ok(Json(reply.into()))
}

#[axum::debug_handler]
pub async fn update_facility(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateFacilityRequest>,
) -> Result<Json<FacilitySummaryResponse>, AppError> {
    let mut client = state.facility_client.clone();

    let reply = client
        .update_facility(proto::UpdateFacilityRequest {
            id: id.clone(),
            name: payload.name.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
        })
        .await
        .map_err(|status| AppError::rpc(status, "Failed to update facility"))?
        .into_inner();

    info!(operation = "UpdateFacility", id = %id, "Updated facility via web gateway");
    Ok(Json(reply.into()))
}

#[axum::debug_handler]
pub async fn delete_facility(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteFacilityResponse>, AppError> {
    let mut client = state.facility_client.clone();

    let reply = client
        .delete_facility(proto::DeleteFacilityRequest { id: id.clone() })
        .await
        .map_err(|status| AppError::rpc(status, "Failed to delete facility"))?
        .into_inner();

    info!(operation = "DeleteFacility", id = %id, "Deleted facility via web gateway");
    Ok(Json(DeleteFacilityResponse {
        success: reply.success,
    }))
}

#[axum::debug_handler]
pub async fn add_available_time(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<AddAvailableTimeRequest>,
) -> Result<Json<FacilityDetailResponse>, AppError> {
    let mut client = state.facility_client.clone();

    let reply = client
        .add_available_time(proto::AddAvailableTimeRequest {
            facility_id: id.clone(),
            time: payload.time.map(proto::TimeWindow::from),
        })
        .await
        .map_err(|status| AppError::rpc(status, "Failed to add available time"))?
        .into_inner();

    info!(operation = "AddAvailableTime", id = %id, "Added available time via web gateway");
    Ok(Json(reply.into()))
}

#[axum::debug_handler]
pub async fn remove_available_time(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<RemoveAvailableTimeRequest>,
) -> Result<Json<FacilityDetailResponse>, AppError> {
    let mut client = state.facility_client.clone();

    let reply = client
        .remove_available_time(proto::RemoveAvailableTimeRequest {
            facility_id: id.clone(),
            start: payload.start,
            end: payload.end,
        })
        .await
        .map_err(|status| AppError::rpc(status, "Failed to remove available time"))?
        .into_inner();

    info!(operation = "RemoveAvailableTime", id = %id, "Removed available time via web gateway");
    Ok(Json(reply.into()))
}
