use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use spacebook_core::models::{
    facility::{
        AddAvailableTimeRequest, CreateFacilityRequest, Facility, FacilityDetailResponse,
        FacilityFields, FacilitySummaryResponse, RemoveAvailableTimeRequest,
    },
    time_window::TimeWindow,
};

fn test_facility(windows: Vec<TimeWindow>) -> Facility {
    Facility {
        id: "0b7c5f5e-6f6c-4f8e-9a57-3c2f0f4b6a11".to_string(),
        name: Some("Test Facility".to_string()),
        description: Some("Test Description".to_string()),
        available_times: windows,
    }
}

#[test]
fn test_push_window_keeps_duplicates_in_order() {
    let mut facility = test_facility(Vec::new());
    let morning = TimeWindow::new("2025-06-11T09:00:00Z", "2025-06-11T10:00:00Z");
    let noon = TimeWindow::new("2025-06-11T12:00:00Z", "2025-06-11T13:00:00Z");

    facility.push_window(morning.clone());
    facility.push_window(noon.clone());
    facility.push_window(morning.clone());

    assert_eq!(facility.available_times, vec![morning.clone(), noon, morning]);
}

#[test]
fn test_remove_windows_drops_every_exact_match() {
    let morning = TimeWindow::new("09:00", "10:00");
    let noon = TimeWindow::new("12:00", "13:00");
    let mut facility = test_facility(vec![morning.clone(), noon.clone(), morning]);

    let removed = facility.remove_windows("09:00", "10:00");

    assert_eq!(removed, 2);
    assert_eq!(facility.available_times, vec![noon]);
}

#[rstest]
#[case("09:00", "11:00")]
#[case("08:00", "10:00")]
#[case("09:00:00", "10:00:00")]
#[case("", "")]
fn test_remove_windows_requires_exact_pair(#[case] start: &str, #[case] end: &str) {
    let mut facility = test_facility(vec![TimeWindow::new("09:00", "10:00")]);

    assert_eq!(facility.remove_windows(start, end), 0);
    assert_eq!(facility.available_times.len(), 1);
}

#[test]
fn test_remove_windows_on_empty_facility_is_noop() {
    let mut facility = test_facility(Vec::new());
    assert_eq!(facility.remove_windows("09:00", "10:00"), 0);
    assert!(facility.available_times.is_empty());
}

#[test]
fn test_fields_copy_everything_but_id() {
    let facility = test_facility(vec![TimeWindow::new("a", "b")]);
    let fields = facility.fields();

    assert_eq!(
        fields,
        FacilityFields {
            name: Some("Test Facility".to_string()),
            description: Some("Test Description".to_string()),
            available_times: vec![TimeWindow::new("a", "b")],
        }
    );
    assert!(FacilityFields::new(None, None).available_times.is_empty());
}

#[test]
fn test_facility_serializes_camel_case() {
    let facility = test_facility(vec![TimeWindow::new("09:00", "10:00")]);
    let value = to_value(&facility).expect("Failed to serialize facility");

    assert_eq!(value["availableTimes"], json!([{ "start": "09:00", "end": "10:00" }]));
    assert!(value.get("available_times").is_none());
}

#[test]
fn test_detail_response_fills_missing_text_with_empty_strings() {
    let mut facility = test_facility(Vec::new());
    facility.name = None;
    facility.description = None;

    let detail = FacilityDetailResponse::from(facility.clone());
    assert_eq!(detail.name, "");
    assert_eq!(detail.description, "");

    let summary = FacilitySummaryResponse::from(facility);
    assert_eq!(
        to_value(&summary).unwrap(),
        json!({ "id": "0b7c5f5e-6f6c-4f8e-9a57-3c2f0f4b6a11", "name": "", "description": "" })
    );
}

#[test]
fn test_requests_tolerate_missing_fields() {
    let create: CreateFacilityRequest = from_str("{}").expect("Failed to parse create request");
    assert!(create.name.is_none());
    assert!(create.description.is_none());

    let add: AddAvailableTimeRequest =
        from_str(r#"{"time":{"start":"09:00"}}"#).expect("Failed to parse add request");
    assert_eq!(add.time, Some(TimeWindow::new("09:00", "")));

    let remove: RemoveAvailableTimeRequest =
        from_str(r#"{"start":"09:00","end":"10:00"}"#).expect("Failed to parse remove request");
    assert_eq!(remove.start, "09:00");
    assert_eq!(remove.end, "10:00");
}
