use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tabletalk::config::AppConfig;
use tabletalk::db;
use tabletalk::handlers;
use tabletalk::models::Session;
use tabletalk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(
        !config.admin_token.is_empty(),
        "ADMIN_TOKEN must be set to guard the reservations listing"
    );

    let conn = db::init_db(&config.database_url)?;
    tracing::info!(path = %config.database_url, "database ready");

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        session: Mutex::new(Session::new()),
    });

    let app = Router::new()
        .route("/", get(handlers::pages::app_page))
        .route("/health", get(handlers::health::health))
        .route("/api/chat", post(handlers::chat::send_message))
        .route("/api/chat/history", get(handlers::chat::history))
        .route("/api/chat/reset", post(handlers::chat::reset))
        .route("/api/menu", get(handlers::menu::get_menu))
        .route(
            "/api/reservations",
            get(handlers::reservations::list_reservations),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
