mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::rsvp::PgSubmissionStore;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to read .env"),
    }

    let config = config::ServerConfig::from_env();

    let state = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "postgres store ready");
            AppState::new(Arc::new(PgSubmissionStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; submissions are kept in memory only");
            AppState::in_memory()
        }
    };

    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, static_dir = %config.static_dir.display(), "rsvp server listening");
    axum::serve(listener, app).await.expect("server failed");
}
