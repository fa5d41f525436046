use std::sync::Arc;

use tryitter_api::database::PgUserRepository;
use tryitter_api::routes::app;
use tryitter_api::types::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = tryitter_api::config::config();
    tracing::info!("Starting Tryitter API in {:?} mode", config.environment);

    let users = PgUserRepository::connect()
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    let state = AppState::new(Arc::new(users));
    let router = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("TRYITTER_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Tryitter API listening on http://{}", bind_addr);

    axum::serve(listener, router).await.expect("server");
}
