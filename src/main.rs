use std::sync::Arc;

use dr_chatbot_backend::{config::Config, routes, state::AppState};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dr_chatbot_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config));

    // Open to every origin; this is a demo backend.
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .with_state(state)
        .layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🩺 Dr. Chatbot API running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
