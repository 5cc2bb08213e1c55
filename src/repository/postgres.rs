use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{EventRepository, StorageError, StorageResult};
use crate::models::{Event, EventFields, EventFilter, NewEvent};

const EVENT_COLUMNS: &str =
    "id, title, description, city, date_time, image_url, category, created_at";

/// Postgres-backed storage. Each call checks a connection out of the pool for
/// a single statement and hands it back when the statement finishes.
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> StorageResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn list(&self, filter: &EventFilter) -> StorageResult<Vec<Event>> {
        // strpos keeps `%` and `_` in user input literal, unlike LIKE.
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE ($1::text IS NULL OR strpos(lower(city), lower($1)) > 0) \
             AND ($2::text IS NULL OR strpos(lower(title), lower($2)) > 0) \
             ORDER BY id"
        );

        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(filter.city())
            .bind(filter.title())
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    async fn insert(&self, new_event: NewEvent) -> StorageResult<Event> {
        let id = new_event.id;
        let NewEvent { fields, .. } = new_event;
        let sql = format!(
            "INSERT INTO events (id, title, description, city, date_time, image_url, category) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {EVENT_COLUMNS}"
        );

        sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .bind(fields.title)
            .bind(fields.description)
            .bind(fields.city)
            .bind(fields.date_time)
            .bind(fields.image_url)
            .bind(fields.category)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    StorageError::DuplicateKey(id)
                }
                other => StorageError::Database(other),
            })
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(event)
    }

    async fn replace_by_id(&self, id: i64, fields: EventFields) -> StorageResult<Event> {
        let sql = format!(
            "UPDATE events SET title = $2, description = $3, city = $4, date_time = $5, \
             image_url = $6, category = $7 WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        );

        sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .bind(fields.title)
            .bind(fields.description)
            .bind(fields.city)
            .bind(fields.date_time)
            .bind(fields.image_url)
            .bind(fields.category)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound(id))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }
}
