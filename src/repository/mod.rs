use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Event, EventFields, EventFilter, NewEvent};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEventRepository;
pub use postgres::PgEventRepository;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("event {0} already exists")]
    DuplicateKey(i64),

    #[error("event {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for event rows. Every mutating call has committed by the time it
/// returns.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self, filter: &EventFilter) -> StorageResult<Vec<Event>>;

    /// Fails with `DuplicateKey` without touching storage if the id is taken.
    async fn insert(&self, new_event: NewEvent) -> StorageResult<Event>;

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Event>>;

    async fn replace_by_id(&self, id: i64, fields: EventFields) -> StorageResult<Event>;

    async fn delete_by_id(&self, id: i64) -> StorageResult<()>;
}
