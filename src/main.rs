use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use citymeet_server::config::{Config, StorageBackend};
use citymeet_server::repository::{EventRepository, InMemoryEventRepository, PgEventRepository};
use citymeet_server::routes::create_routes;
use citymeet_server::seed::sample_events;
use citymeet_server::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("citymeet_server=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let events: Arc<dyn EventRepository> = match config.storage_backend {
        StorageBackend::Postgres => {
            let repository =
                PgEventRepository::connect(&config.database_url, config.database_max_connections)
                    .await
                    .expect("Failed to connect to database");
            tracing::info!("Successfully connected to database");

            repository
                .migrate()
                .await
                .expect("Failed to run migrations");
            tracing::info!("Migrations run successfully");

            Arc::new(repository)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, events will not survive a restart");
            Arc::new(InMemoryEventRepository::with_events(sample_events()))
        }
    };

    let app = create_routes(AppState::new(events), config.cors_allowed_origin.clone());

    let addr = config.bind_addr();
    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
