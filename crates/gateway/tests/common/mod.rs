#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use spacebook_core::{
    errors::{FacilityError, FacilityResult},
    models::facility::{Facility, FacilityFields},
};
use spacebook_db::{FacilityStore, InMemoryFacilityStore};
use spacebook_facility::client::{connect_lazy, connect_lazy_with_timeout};
use spacebook_gateway::{app, with_request_timeout, GatewayState};
use tokio::net::TcpListener;

pub const MISSING_FACILITY_ID: &str = "5e0f0c2a-8d4b-4c57-b1f6-0a9d3c7e2b44";

/// Runs the facility gRPC service on a free port and returns its URI.
pub async fn spawn_facility_service() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(spacebook_facility::serve(
        listener,
        Arc::new(InMemoryFacilityStore::new()),
    ));

    format!("http://{}", addr)
}

/// Serves `router` on a free port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

pub fn fake_auth_service() -> Router {
    Router::new()
        .route(
            "/users/register",
            post(|Json(body): Json<Value>| async move {
                if body["email"] == "taken@example.com" {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "detail": "Email already registered" })),
                    )
                } else {
                    (
                        StatusCode::OK,
                        Json(json!({ "message": "User created successfully" })),
                    )
                }
            }),
        )
        .route(
            "/users/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "secret" {
                    (
                        StatusCode::OK,
                        Json(json!({ "access_token": "token-123", "token_type": "bearer" })),
                    )
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "detail": "Invalid credentials" })),
                    )
                }
            }),
        )
}

pub fn fake_reservation_service() -> Router {
    Router::new()
        .route(
            "/reservations",
            post(|Json(mut body): Json<Value>| async move {
                body["id"] = json!("res-1");
                Json(body)
            }),
        )
        .route(
            "/reservations/:id",
            get(|Path(id): Path<String>| async move {
                if id == "res-1" {
                    (StatusCode::OK, Json(json!({ "id": id, "facilityId": "f-1" })))
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({ "detail": "no such reservation" })))
                }
            })
            .delete(|Path(id): Path<String>| async move {
                if id == "res-1" {
                    StatusCode::OK
                } else {
                    StatusCode::NOT_FOUND
                }
            }),
        )
}

pub struct Backends {
    pub facility_uri: String,
    pub auth_url: String,
    pub reservation_url: String,
}

impl Backends {
    /// Every backend up and answering.
    pub async fn running() -> Self {
        Self {
            facility_uri: spawn_facility_service().await,
            auth_url: spawn_backend(fake_auth_service()).await,
            reservation_url: spawn_backend(fake_reservation_service()).await,
        }
    }

    /// Every backend address refuses connections.
    pub async fn down() -> Self {
        Self {
            facility_uri: unreachable_url().await,
            auth_url: unreachable_url().await,
            reservation_url: unreachable_url().await,
        }
    }

    pub fn gateway(&self) -> TestServer {
        let state = GatewayState {
            facility_client: connect_lazy(&self.facility_uri).unwrap(),
            http_client: reqwest::Client::new(),
            auth_service_url: self.auth_url.clone(),
            reservation_service_url: self.reservation_url.clone(),
        };

        TestServer::new(app(Arc::new(state))).unwrap()
    }

    /// Gateway bounded by `request_deadline`, with downstream calls bounded
    /// by `upstream_deadline` when one is given.
    pub fn gateway_with_deadlines(
        &self,
        request_deadline: Duration,
        upstream_deadline: Option<Duration>,
    ) -> TestServer {
        let (facility_client, http_client) = match upstream_deadline {
            Some(deadline) => (
                connect_lazy_with_timeout(&self.facility_uri, deadline).unwrap(),
                reqwest::Client::builder().timeout(deadline).build().unwrap(),
            ),
            None => (
                connect_lazy(&self.facility_uri).unwrap(),
                reqwest::Client::new(),
            ),
        };

        let state = GatewayState {
            facility_client,
            http_client,
            auth_service_url: self.auth_url.clone(),
            reservation_service_url: self.reservation_url.clone(),
        };

        TestServer::new(with_request_timeout(app(Arc::new(state)), request_deadline)).unwrap()
    }
}

pub const BACKEND_DELAY: Duration = Duration::from_secs(5);

/// Store whose reads never finish within a test's deadlines.
pub struct SlowFacilityStore;

#[async_trait]
impl FacilityStore for SlowFacilityStore {
    async fn get(&self, _id: &str) -> FacilityResult<Option<Facility>> {
        tokio::time::sleep(BACKEND_DELAY).await;
        Ok(None)
    }

    async fn create(&self, _fields: FacilityFields) -> FacilityResult<Facility> {
        tokio::time::sleep(BACKEND_DELAY).await;
        Err(FacilityError::Internal(eyre::eyre!("slow store accepts no writes")))
    }

    async fn replace(&self, _id: &str, _fields: FacilityFields) -> FacilityResult<Option<Facility>> {
        tokio::time::sleep(BACKEND_DELAY).await;
        Ok(None)
    }

    async fn delete(&self, _id: &str) -> FacilityResult<bool> {
        tokio::time::sleep(BACKEND_DELAY).await;
        Ok(false)
    }
}

pub async fn spawn_slow_facility_service() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(spacebook_facility::serve(listener, Arc::new(SlowFacilityStore)));

    format!("http://{}", addr)
}

/// Auth and reservation backends that answer only after [`BACKEND_DELAY`].
pub fn slow_backend() -> Router {
    async fn late() -> Json<Value> {
        tokio::time::sleep(BACKEND_DELAY).await;
        Json(json!({ "late": true }))
    }

    Router::new()
        .route("/users/login", post(late))
        .route("/reservations", post(late))
        .route("/reservations/:id", get(late))
}
