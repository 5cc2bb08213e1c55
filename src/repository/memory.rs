use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{EventRepository, StorageError, StorageResult};
use crate::models::{Event, EventFields, EventFilter, NewEvent};

/// Keeps events in insertion order behind a lock. Used by tests and by the
/// `memory` storage backend.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self, filter: &EventFilter) -> StorageResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().filter(|e| filter.matches(e)).cloned().collect())
    }

    async fn insert(&self, new_event: NewEvent) -> StorageResult<Event> {
        let mut events = self.events.write().await;
        if events.iter().any(|e| e.id == new_event.id) {
            return Err(StorageError::DuplicateKey(new_event.id));
        }

        let event = Event::from_new(new_event, Utc::now());
        events.push(event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn replace_by_id(&self, id: i64, fields: EventFields) -> StorageResult<Event> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StorageError::NotFound(id))?;

        event.replace_fields(fields);
        Ok(event.clone())
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let mut events = self.events.write().await;
        let index = events
            .iter()
            .position(|e| e.id == id)
            .ok_or(StorageError::NotFound(id))?;

        events.remove(index);
        Ok(())
    }
}
