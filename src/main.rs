//! Server binary: ensures the characters table exists, then mounts the
//! common and character routes.

use axum::Router;
use character_service::{character_routes, common_routes, AppState, CharacterStore, Config};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("character_service=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    let store = CharacterStore::new(pool);
    store.ensure_table().await?;
    let state = AppState { store };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(character_routes(state))
        .layer(RequestBodyLimitLayer::new(64 * 1024));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
