//! User service binary: resolves config from the environment, prepares the database, serves on `PORT` (3000).

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use user_service::{app, ensure_database_exists, ensure_users_table, AppState, PgUserStore, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("user_service=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let database_url = config.connection_url();
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&database_url)
        .await?;
    ensure_users_table(&pool, &config.users_table).await?;

    let store = PgUserStore::new(pool, &config.users_table);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(store, config);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
