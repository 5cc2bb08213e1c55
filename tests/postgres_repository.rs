//! Runs against a live Postgres. Set `DATABASE_URL` and use
//! `cargo test -- --ignored`; each test gets a fresh database with the
//! crate's migrations applied.

use sqlx::PgPool;

use citymeet_server::models::{EventFields, EventFilter, NewEvent};
use citymeet_server::repository::{EventRepository, PgEventRepository, StorageError};

fn fields(title: &str, city: &str) -> EventFields {
    EventFields {
        title: title.to_string(),
        description: "...".to_string(),
        city: city.to_string(),
        date_time: "2026-01-01T20:00:00Z".to_string(),
        image_url: None,
        category: None,
    }
}

fn new_event(id: i64, title: &str, city: &str) -> NewEvent {
    NewEvent {
        id,
        fields: fields(title, city),
    }
}

fn filter(city: Option<&str>, title: Option<&str>) -> EventFilter {
    EventFilter {
        city: city.map(str::to_string),
        title: title.map(str::to_string),
    }
}

async fn ids(repo: &PgEventRepository, filter: &EventFilter) -> Vec<i64> {
    repo.list(filter)
        .await
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn duplicate_primary_key_is_reported(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    repo.insert(new_event(1, "Jazz Night", "Berlin")).await.unwrap();

    let err = repo
        .insert(new_event(1, "Imposter", "Munich"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::DuplicateKey(1)));

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.title, "Jazz Night");
    assert_eq!(stored.city, "Berlin");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn filters_ignore_case_and_treat_wildcards_literally(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    repo.insert(new_event(1, "Jazz Night", "Berlin")).await.unwrap();
    repo.insert(new_event(2, "100% Techno", "Munich")).await.unwrap();
    repo.insert(new_event(3, "Book_Club", "Berlin")).await.unwrap();

    assert_eq!(ids(&repo, &filter(Some("BERLIN"), None)).await, vec![1, 3]);
    assert_eq!(ids(&repo, &filter(Some("berlin"), Some("jazz"))).await, vec![1]);
    assert_eq!(ids(&repo, &filter(None, Some("%"))).await, vec![2]);
    assert_eq!(ids(&repo, &filter(None, Some("_"))).await, vec![3]);
    assert_eq!(ids(&repo, &filter(Some(""), Some(""))).await, vec![1, 2, 3]);
}

// lower() follows the database's LC_CTYPE; under the C locale only ASCII
// folds.
#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a Postgres DATABASE_URL with a UTF-8, non-C LC_CTYPE"]
async fn filters_fold_non_ascii_case(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    repo.insert(new_event(1, "Oktoberfest", "München")).await.unwrap();

    assert_eq!(ids(&repo, &filter(Some("MÜNCHEN"), None)).await, vec![1]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn replace_keeps_created_at_and_never_creates(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    let mut original = new_event(1, "Jazz Night", "Berlin");
    original.fields.category = Some("Music".to_string());
    let created = repo.insert(original).await.unwrap();

    let updated = repo
        .replace_by_id(1, fields("Rock Night", "Hamburg"))
        .await
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.title, "Rock Night");
    assert_eq!(updated.city, "Hamburg");
    assert_eq!(updated.category, None);
    assert_eq!(updated.created_at, created.created_at);

    let err = repo
        .replace_by_id(2, fields("Ghost", "Berlin"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound(2)));
    assert!(repo.find_by_id(2).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn delete_of_missing_row_is_not_found(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    repo.insert(new_event(1, "Jazz Night", "Berlin")).await.unwrap();

    repo.delete_by_id(1).await.unwrap();
    assert!(repo.find_by_id(1).await.unwrap().is_none());

    let err = repo.delete_by_id(1).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(1)));
}
