use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacilityError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] eyre::Report),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl FacilityError {
    pub fn not_found(id: &str) -> Self {
        FacilityError::NotFound(format!("Facility with ID {} not found", id))
    }

    pub fn invalid_identifier(id: &str) -> Self {
        FacilityError::InvalidIdentifier(format!("'{}' is not a valid facility identifier", id))
    }

    /// Collapses every category except `NotFound` into `Internal`.
    ///
    /// Used by operations where only absence is reported to the caller as-is.
    pub fn into_internal(self) -> Self {
        match self {
            FacilityError::NotFound(_) | FacilityError::Internal(_) => self,
            other => FacilityError::Internal(eyre::eyre!(other.to_string())),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FacilityError::NotFound(_))
    }
}

pub type FacilityResult<T> = Result<T, FacilityError>;
