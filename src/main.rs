use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yoga_studio::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded successfully");

    let state = AppState::new(&config).await?;
    tracing::info!("✅ AppState initialized");

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Server listening on http://{}", config.bind_addr);
    tracing::info!("✅ API clients should target {}", config.api_base_url);

    axum::serve(listener, app).await?;

    Ok(())
}
