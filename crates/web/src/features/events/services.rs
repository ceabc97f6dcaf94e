use sqlx::SqlitePool;
use storage::{
    dto::event::CreateEventRequest,
    error::Result,
    models::{Event, PointsSchedule},
    repository::{
        event::{EventRepository, NewEvent},
        result::ResultRepository,
    },
};

/// List all events ordered by category, name, gender and age group
pub async fn list_events(pool: &SqlitePool) -> Result<Vec<Event>> {
    EventRepository::new(pool).list().await
}

pub async fn get_event(pool: &SqlitePool, id: i64) -> Result<Event> {
    EventRepository::new(pool).find_by_id(id).await
}

pub async fn create_event(
    pool: &SqlitePool,
    request: &CreateEventRequest,
    points_schedule: &PointsSchedule,
) -> Result<Event> {
    EventRepository::new(pool)
        .create(&NewEvent {
            name: &request.name,
            category: &request.category,
            gender: &request.gender,
            age_group: request.age_group.as_deref(),
            points_schedule,
        })
        .await
}

/// Delete an event and its results
pub async fn delete_event(pool: &SqlitePool, id: i64) -> Result<()> {
    EventRepository::new(pool).delete(id).await
}

/// Remove every result recorded for an existing event
pub async fn clear_event_results(pool: &SqlitePool, id: i64) -> Result<u64> {
    let event = EventRepository::new(pool).find_by_id(id).await?;
    ResultRepository::new(pool).clear_event(event.id).await
}
