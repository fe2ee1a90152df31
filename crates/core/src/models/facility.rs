use serde::{Deserialize, Serialize};

use super::time_window::TimeWindow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub available_times: Vec<TimeWindow>,
}

impl Facility {
    /// Appends a window at the end. Duplicates and overlaps are kept.
    pub fn push_window(&mut self, window: TimeWindow) {
        self.available_times.push(window);
    }

    /// Drops every window equal to `(start, end)` and returns how many were removed.
    pub fn remove_windows(&mut self, start: &str, end: &str) -> usize {
        let before = self.available_times.len();
        self.available_times.retain(|window| !window.matches(start, end));
        before - self.available_times.len()
    }

    pub fn fields(&self) -> FacilityFields {
        FacilityFields {
            name: self.name.clone(),
            description: self.description.clone(),
            available_times: self.available_times.clone(),
        }
    }
}

/// Everything a store persists for a facility apart from its identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available_times: Vec<TimeWindow>,
}

impl FacilityFields {
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        Self {
            name,
            description,
            available_times: Vec::new(),
        }
    }
}

// HTTP payloads accepted and returned by the web gateway.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFacilityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFacilityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddAvailableTimeRequest {
    pub time: Option<TimeWindow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveAvailableTimeRequest {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitySummaryResponse {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDetailResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub available_times: Vec<TimeWindow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFacilityResponse {
    pub success: bool,
}

impl From<Facility> for FacilitySummaryResponse {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            name: facility.name.unwrap_or_default(),
            description: facility.description.unwrap_or_default(),
        }
    }
}

impl From<Facility> for FacilityDetailResponse {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            name: facility.name.unwrap_or_default(),
            description: facility.description.unwrap_or_default(),
            available_times: facility.available_times,
        }
    }
}
