//! Wire messages of the `facility.FacilityService` gRPC contract.

use spacebook_core::models::{
    facility::{Facility, FacilityDetailResponse, FacilitySummaryResponse},
    time_window,
};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeWindow {
    #[prost(string, tag = "1")]
    pub start: String,
    #[prost(string, tag = "2")]
    pub end: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateFacilityRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFacilityRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateFacilityRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFacilityRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFacilityResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddAvailableTimeRequest {
    #[prost(string, tag = "1")]
    pub facility_id: String,
    #[prost(message, optional, tag = "2")]
    pub time: Option<TimeWindow>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveAvailableTimeRequest {
    #[prost(string, tag = "1")]
    pub facility_id: String,
    #[prost(string, tag = "2")]
    pub start: String,
    #[prost(string, tag = "3")]
    pub end: String,
}

/// Reply of `CreateFacility` and `UpdateFacility`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FacilityResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
}

/// Reply of every call that returns the time windows as well.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FacilityDetailsResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(message, repeated, tag = "4")]
    pub available_times: Vec<TimeWindow>,
}

include!(concat!(env!("OUT_DIR"), "/facility.FacilityService.rs"));

/// proto3 strings carry no presence, so an empty string means "not given".
pub fn optional_text(value: String) -> Option<String> {
    Some(value).filter(|text| !text.is_empty())
}

impl From<time_window::TimeWindow> for TimeWindow {
    fn from(window: time_window::TimeWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
        }
    }
}

impl From<TimeWindow> for time_window::TimeWindow {
    fn from(window: TimeWindow) -> Self {
        time_window::TimeWindow::new(window.start, window.end)
    }
}

impl From<Facility> for FacilityResponse {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            name: facility.name.unwrap_or_default(),
            description: facility.description.unwrap_or_default(),
        }
    }
}

impl From<Facility> for FacilityDetailsResponse {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            name: facility.name.unwrap_or_default(),
            description: facility.description.unwrap_or_default(),
            available_times: facility
                .available_times
                .into_iter()
                .map(TimeWindow::from)
                .collect(),
        }
    }
}

// Replies rendered as JSON by the gateway keep the wire field set.

impl From<FacilityResponse> for FacilitySummaryResponse {
    fn from(reply: FacilityResponse) -> Self {
        Self {
            id: reply.id,
            name: reply.name,
            description: reply.description,
        }
    }
}

impl From<FacilityDetailsResponse> for FacilityDetailResponse {
    fn from(reply: FacilityDetailsResponse) -> Self {
        Self {
            id: reply.id,
            name: reply.name,
            description: reply.description,
            available_times: reply
                .available_times
                .into_iter()
                .map(time_window::TimeWindow::from)
                .collect(),
        }
    }
}
