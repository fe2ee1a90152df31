use color_eyre::eyre::Result;
use dotenv::dotenv;
use spacebook_facility::config::ServiceConfig;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ServiceConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting facility service");

    // Postgres when DATABASE_URL is set, otherwise process memory
    let store = spacebook_facility::build_store(&config).await?;

    // Serve gRPC until the listener fails
    if let Err(e) = spacebook_facility::start_server(config, store).await {
        error!(error = %e, "Facility service error");
        return Err(e);
    }

    Ok(())
}
