//! Client side of the facility gRPC contract.

use eyre::{Result, WrapErr};
use spacebook_core::errors::FacilityError;
use std::time::Duration;
use tonic::{
    transport::{Channel, Endpoint},
    Code, Status,
};

use crate::proto::facility_service_client::FacilityServiceClient;

pub type FacilityClient = FacilityServiceClient<Channel>;

/// Builds a client whose connection is established on first use.
///
/// The caller can start before the facility service is reachable; a call made
/// while it is down fails with `UNAVAILABLE`.
pub fn connect_lazy(uri: &str) -> Result<FacilityClient> {
    let channel = endpoint(uri)?.connect_lazy();

    Ok(FacilityServiceClient::new(channel))
}

/// Like [`connect_lazy`], but every call is abandoned once `timeout` has
/// passed, including time spent establishing the connection.
pub fn connect_lazy_with_timeout(uri: &str, timeout: Duration) -> Result<FacilityClient> {
    let channel = endpoint(uri)?
        .connect_timeout(timeout)
        .timeout(timeout)
        .connect_lazy();

    Ok(FacilityServiceClient::new(channel))
}

fn endpoint(uri: &str) -> Result<Endpoint> {
    Channel::from_shared(uri.to_string())
        .wrap_err_with(|| format!("Invalid facility service URI: {}", uri))
}

/// Recovers the domain category carried by a gRPC status.
pub fn error_from_status(status: Status) -> FacilityError {
    match status.code() {
        Code::NotFound => FacilityError::NotFound(status.message().to_string()),
        Code::InvalidArgument => FacilityError::InvalidIdentifier(status.message().to_string()),
        Code::Unavailable => FacilityError::UpstreamUnavailable(status.message().to_string()),
        code => FacilityError::Internal(eyre::eyre!("{:?}: {}", code, status.message())),
    }
}
