use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// A stored event row. `created_at` is assigned on insert and never leaves
/// the server.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub city: String,
    pub date_time: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_new(new_event: NewEvent, created_at: DateTime<Utc>) -> Self {
        let NewEvent { id, fields } = new_event;
        Self {
            id,
            title: fields.title,
            description: fields.description,
            city: fields.city,
            date_time: fields.date_time,
            image_url: fields.image_url,
            category: fields.category,
            created_at,
        }
    }

    /// Overwrites every mutable field. `id` and `created_at` stay as they are.
    pub fn replace_fields(&mut self, fields: EventFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.city = fields.city;
        self.date_time = fields.date_time;
        self.image_url = fields.image_url;
        self.category = fields.category;
    }
}

/// The client-writable part of an event, used as the full replacement body
/// for updates.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct EventFields {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub city: String,
    /// Kept as an opaque string, usually ISO 8601.
    pub date_time: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Create payload: the caller picks the id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewEvent {
    pub id: i64,
    #[serde(flatten)]
    pub fields: EventFields,
}

// Reports field errors at the top level, the same shape as for updates.
impl Validate for NewEvent {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.fields.validate()
    }
}

/// `?city=&title=` filters for listing. Matching is a case-insensitive
/// substring test, and both filters must hold.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub city: Option<String>,
    pub title: Option<String>,
}

impl EventFilter {
    pub fn city(&self) -> Option<&str> {
        non_empty(self.city.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.city().map_or(true, |city| contains_ignore_case(&event.city, city))
            && self
                .title()
                .map_or(true, |title| contains_ignore_case(&event.title, title))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
