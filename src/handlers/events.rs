use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

use crate::models::{Event, EventFields, EventFilter, NewEvent};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{LastValueQuery, ValidatedJson, ValidatedPath};
use crate::utils::response::message;

pub async fn list_events(
    State(state): State<AppState>,
    LastValueQuery(filter): LastValueQuery<EventFilter>,
) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.events.list(&filter).await?;
    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(new_event): ValidatedJson<NewEvent>,
) -> Result<Json<Event>, AppError> {
    let event = state.events.insert(new_event).await?;
    info!(event_id = event.id, "Event created");
    Ok(Json(event))
}

/// Whole-record replace. An `id` in the body is ignored; the path wins.
pub async fn update_event(
    State(state): State<AppState>,
    ValidatedPath(event_id): ValidatedPath<i64>,
    ValidatedJson(fields): ValidatedJson<EventFields>,
) -> Result<Json<Event>, AppError> {
    let event = state.events.replace_by_id(event_id, fields).await?;
    info!(event_id, "Event updated");
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    ValidatedPath(event_id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.events.delete_by_id(event_id).await?;
    info!(event_id, "Event deleted");
    Ok(message("Event deleted successfully"))
}
