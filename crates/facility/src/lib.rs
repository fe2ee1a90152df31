//! # Facility Service
//!
//! Owns facilities and their open time windows and serves them over the
//! `facility.FacilityService` gRPC contract.
//!
//! - **service**: domain operations on top of a `FacilityStore`
//! - **grpc**: tonic server that adapts requests and error categories
//! - **client**: lazily connected client plus status-to-error mapping, used by the gateway
//! - **proto**: wire messages and generated service stubs

pub mod client;
pub mod config;
pub mod grpc;
pub mod proto;
pub mod service;

use std::sync::Arc;

use eyre::Result;
use spacebook_db::{FacilityStore, InMemoryFacilityStore, PgFacilityStore};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

use crate::{grpc::FacilityRpc, service::FacilityService};

/// Picks the PostgreSQL store when a database is configured, the in-memory one otherwise.
pub async fn build_store(config: &config::ServiceConfig) -> Result<Arc<dyn FacilityStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = spacebook_db::create_pool(url).await?;
            spacebook_db::schema::initialize_database(&pool).await?;
            info!("Using PostgreSQL facility store");
            Ok(Arc::new(PgFacilityStore::new(pool)))
        }
        None => {
            info!("DATABASE_URL not set, keeping facilities in memory");
            Ok(Arc::new(InMemoryFacilityStore::new()))
        }
    }
}

/// Binds the configured address and serves the facility gRPC service until the process ends.
pub async fn start_server(config: config::ServiceConfig, store: Arc<dyn FacilityStore>) -> Result<()> {
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "gRPC server running");

    serve(listener, store).await
}

/// Serves on an already bound listener.
pub async fn serve(listener: TcpListener, store: Arc<dyn FacilityStore>) -> Result<()> {
    let rpc = FacilityRpc::new(FacilityService::new(store));

    Server::builder()
        .add_service(rpc.into_server())
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await?;

    Ok(())
}
