use color_eyre::eyre::Result;
use dotenv::dotenv;
use spacebook_gateway::config::GatewayConfig;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(
        auth = %config.auth_service_url,
        reservations = %config.reservation_service_url,
        facilities = %config.facility_grpc_url,
        "Starting Web API Gateway"
    );

    // Start the gateway
    spacebook_gateway::start_server(config).await?;

    Ok(())
}
