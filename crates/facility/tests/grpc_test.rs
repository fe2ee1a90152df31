use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use spacebook_core::errors::FacilityError;
use spacebook_db::InMemoryFacilityStore;
use spacebook_facility::{
    client::{connect_lazy, error_from_status, FacilityClient},
    proto::{
        AddAvailableTimeRequest, CreateFacilityRequest, DeleteFacilityRequest, GetFacilityRequest,
        RemoveAvailableTimeRequest, TimeWindow, UpdateFacilityRequest,
    },
};
use tokio::net::TcpListener;
use tonic::Code;

async fn spawn_facility_service() -> FacilityClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(spacebook_facility::serve(
        listener,
        Arc::new(InMemoryFacilityStore::new()),
    ));

    connect_lazy(&format!("http://{}", addr)).unwrap()
}

fn window(start: &str, end: &str) -> TimeWindow {
    TimeWindow {
        start: start.to_string(),
        end: end.to_string(),
    }
}

async fn create(client: &mut FacilityClient) -> String {
    client
        .create_facility(CreateFacilityRequest {
            name: "Test Facility".to_string(),
            description: "Test Description".to_string(),
        })
        .await
        .expect("CreateFacility failed")
        .into_inner()
        .id
}

#[tokio::test]
async fn test_create_and_get_over_grpc() {
    let mut client = spawn_facility_service().await;

    let created = client
        .create_facility(CreateFacilityRequest {
            name: "Test Facility".to_string(),
            description: "Test Description".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(created.name, "Test Facility");
    assert_eq!(created.description, "Test Description");
    assert!(!created.id.is_empty());

    let fetched = client
        .get_facility(GetFacilityRequest { id: created.id.clone() })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Test Facility");
    assert!(fetched.available_times.is_empty());
}

#[tokio::test]
async fn test_window_lifecycle_over_grpc() {
    let mut client = spawn_facility_service().await;
    let id = create(&mut client).await;

    let added = client
        .add_available_time(AddAvailableTimeRequest {
            facility_id: id.clone(),
            time: Some(window("2025-06-11T09:00:00Z", "2025-06-11T10:00:00Z")),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(
        added.available_times,
        vec![window("2025-06-11T09:00:00Z", "2025-06-11T10:00:00Z")]
    );

    let removed = client
        .remove_available_time(RemoveAvailableTimeRequest {
            facility_id: id.clone(),
            start: "2025-06-11T09:00:00Z".to_string(),
            end: "2025-06-11T10:00:00Z".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(removed.available_times.is_empty());

    // A second removal of the same pair still succeeds
    let again = client
        .remove_available_time(RemoveAvailableTimeRequest {
            facility_id: id,
            start: "2025-06-11T09:00:00Z".to_string(),
            end: "2025-06-11T10:00:00Z".to_string(),
        })
        .await;
    assert!(again.is_ok());
}

#[tokio::test]
async fn test_add_without_time_appends_empty_window() {
    let mut client = spawn_facility_service().await;
    let id = create(&mut client).await;

    let added = client
        .add_available_time(AddAvailableTimeRequest {
            facility_id: id,
            time: None,
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(added.available_times, vec![window("", "")]);
}

#[tokio::test]
async fn test_update_and_delete_over_grpc() {
    let mut client = spawn_facility_service().await;
    let id = create(&mut client).await;

    let updated = client
        .update_facility(UpdateFacilityRequest {
            id: id.clone(),
            name: "Court B".to_string(),
            description: String::new(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(updated.name, "Court B");
    assert_eq!(updated.description, "");

    let deleted = client
        .delete_facility(DeleteFacilityRequest { id: id.clone() })
        .await
        .unwrap()
        .into_inner();
    assert!(deleted.success);

    let status = client
        .get_facility(GetFacilityRequest { id })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "Facility not found");
}

#[rstest]
#[case("3a1f6b7e-0c57-4a55-8f0e-0d7b5c1e2f33", Code::NotFound)]
#[case("not-a-valid-id", Code::InvalidArgument)]
#[tokio::test]
async fn test_get_failure_codes(#[case] id: &str, #[case] expected: Code) {
    let mut client = spawn_facility_service().await;

    let status = client
        .get_facility(GetFacilityRequest { id: id.to_string() })
        .await
        .unwrap_err();

    assert_eq!(status.code(), expected);
}

#[tokio::test]
async fn test_delete_malformed_id_is_internal() {
    let mut client = spawn_facility_service().await;

    let status = client
        .delete_facility(DeleteFacilityRequest {
            id: "not-a-valid-id".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "Error deleting facility");
    assert!(matches!(error_from_status(status), FacilityError::Internal(_)));
}
