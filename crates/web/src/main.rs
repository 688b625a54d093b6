use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_db::bootstrap::Bootstrap;
use folio_web::config::ServerConfig;
use folio_web::router::build_app_router;
use folio_web::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_web=debug,folio_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    // The pool is lazy and a dead database is not fatal: pages degrade to
    // the compiled-in fallback content. Only a malformed URL stops startup.
    let pool =
        folio_db::create_pool(&config.database_url).expect("DATABASE_URL must be a valid URL");

    match folio_db::health_check(&pool).await {
        Ok(()) => tracing::info!("Database reachable"),
        Err(err) => {
            tracing::warn!(error = %err, "Database unreachable; pages will serve fallback content")
        }
    }

    // --- App state ---
    let state = AppState {
        pool,
        bootstrap: Arc::new(Bootstrap::new()),
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
