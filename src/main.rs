use anyhow::Result;
use palaver::{config, state, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palaver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting palaver");

    // Configuration is read once here and travels by reference from now on
    let config = config::Config::from_env()?;

    let state = state::AppState::new(config)?;

    // Start web server
    web::start_server(state).await?;

    Ok(())
}
