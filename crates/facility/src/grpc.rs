//! gRPC server implementation for FacilityService
//!
//! Unpacks each request, delegates to the domain [`FacilityService`] and
//! turns its typed failures into `tonic::Status` codes.

use tonic::{Request, Response, Status};

use spacebook_core::errors::FacilityError;

use crate::proto::{
    facility_service_server::{self, FacilityServiceServer},
    optional_text, AddAvailableTimeRequest, CreateFacilityRequest, DeleteFacilityRequest,
    DeleteFacilityResponse, FacilityDetailsResponse, FacilityResponse, GetFacilityRequest,
    RemoveAvailableTimeRequest, UpdateFacilityRequest,
};
use crate::service::FacilityService;

/// Error wrapper that maps domain failures onto gRPC status codes.
///
/// Only the category and a fixed detail string leave the process; the
/// underlying cause has already been logged by the service. `detail` is the
/// text sent with `INTERNAL` and names the operation that failed.
#[derive(Debug)]
pub struct RpcError {
    pub error: FacilityError,
    pub detail: &'static str,
}

impl From<RpcError> for Status {
    fn from(err: RpcError) -> Self {
        match err.error {
            FacilityError::NotFound(_) => Status::not_found("Facility not found"),
            FacilityError::InvalidIdentifier(detail) | FacilityError::BadRequest(detail) => {
                Status::invalid_argument(detail)
            }
            FacilityError::Internal(_) | FacilityError::UpstreamUnavailable(_) => {
                Status::internal(err.detail)
            }
        }
    }
}

fn rpc_status(detail: &'static str) -> impl Fn(FacilityError) -> Status {
    move |error| RpcError { error, detail }.into()
}

/// gRPC service implementation that wraps the domain service.
#[derive(Clone)]
pub struct FacilityRpc {
    service: FacilityService,
}

impl FacilityRpc {
    pub fn new(service: FacilityService) -> Self {
        Self { service }
    }

    pub fn into_server(self) -> FacilityServiceServer<Self> {
        FacilityServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl facility_service_server::FacilityService for FacilityRpc {
    async fn create_facility(
        &self,
        request: Request<CreateFacilityRequest>,
    ) -> Result<Response<FacilityResponse>, Status> {
        let req = request.into_inner();

        let facility = self
            .service
            .create_facility(optional_text(req.name), optional_text(req.description))
            .await
            .map_err(rpc_status("Error creating facility"))?;

        Ok(Response::new(facility.into()))
    }

    async fn get_facility(
        &self,
        request: Request<GetFacilityRequest>,
    ) -> Result<Response<FacilityDetailsResponse>, Status> {
        let req = request.into_inner();

        let facility = self
            .service
            .get_facility(&req.id)
            .await
            .map_err(rpc_status("Error fetching facility"))?;

        Ok(Response::new(facility.into()))
    }

    async fn update_facility(
        &self,
        request: Request<UpdateFacilityRequest>,
    ) -> Result<Response<FacilityResponse>, Status> {
        let req = request.into_inner();

        let facility = self
            .service
            .update_facility(&req.id, optional_text(req.name), optional_text(req.description))
            .await
            .map_err(rpc_status("Error updating facility"))?;

        Ok(Response::new(facility.into()))
    }

    async fn delete_facility(
        &self,
        request: Request<DeleteFacilityRequest>,
    ) -> Result<Response<DeleteFacilityResponse>, Status> {
        let req = request.into_inner();

        let success = self
            .service
            .delete_facility(&req.id)
            .await
            .map_err(rpc_status("Error deleting facility"))?;

        Ok(Response::new(DeleteFacilityResponse { success }))
    }

    async fn add_available_time(
        &self,
        request: Request<AddAvailableTimeRequest>,
    ) -> Result<Response<FacilityDetailsResponse>, Status> {
        let req = request.into_inner();

        // A missing window is stored as an empty pair, like any other unchecked value
        let window = req.time.unwrap_or_default().into();

        let facility = self
            .service
            .add_available_time(&req.facility_id, window)
            .await
            .map_err(rpc_status("Internal server error"))?;

        Ok(Response::new(facility.into()))
    }

    async fn remove_available_time(
        &self,
        request: Request<RemoveAvailableTimeRequest>,
    ) -> Result<Response<FacilityDetailsResponse>, Status> {
        let req = request.into_inner();

        let facility = self
            .service
            .remove_available_time(&req.facility_id, &req.start, &req.end)
            .await
            .map_err(rpc_status("Internal server error"))?;

        Ok(Response::new(facility.into()))
    }
}
