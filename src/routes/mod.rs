use axum::http::HeaderValue;
use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::handlers::events::{create_event, delete_event, list_events, update_event};
use crate::handlers::health_check;
use crate::state::AppState;

pub fn create_routes(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(list_events).post(create_event))
        .route("/events/:event_id", put(update_event).delete(delete_event))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(allowed_origin))
}
