use chrono::Utc;

use crate::models::Event;

/// Events the in-memory backend starts with, so a fresh dev server has
/// something to show.
pub fn sample_events() -> Vec<Event> {
    let now = Utc::now();
    let samples = [
        (
            1,
            "React & TypeScript Workshop",
            "Hands-on session learning advanced React patterns.",
            "Berlin",
            "2026-03-15T18:00:00Z",
            "react",
            "Tech",
        ),
        (
            2,
            "Local Hiking Meetup",
            "Enjoy a day hike on the local trails and meet other outdoor enthusiasts.",
            "Munich",
            "2026-03-20T09:30:00Z",
            "hike",
            "Outdoors",
        ),
        (
            3,
            "Book Club: 'The Martian'",
            "Discussing 'The Martian' over coffee.",
            "Berlin",
            "2026-04-01T19:00:00Z",
            "book",
            "Social",
        ),
    ];

    samples
        .into_iter()
        .map(
            |(id, title, description, city, date_time, image_seed, category)| Event {
                id,
                title: title.to_string(),
                description: description.to_string(),
                city: city.to_string(),
                date_time: date_time.to_string(),
                image_url: Some(format!("https://picsum.photos/seed/{image_seed}/300/200")),
                category: Some(category.to_string()),
                created_at: now,
            },
        )
        .collect()
}
