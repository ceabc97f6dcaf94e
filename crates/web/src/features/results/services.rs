use sqlx::SqlitePool;
use storage::{
    dto::result::{RecordResultRequest, ResultListing},
    error::Result,
    models::EventResult,
    repository::{event::EventRepository, result::ResultRepository},
};

/// Newest results first, or one event's results by position
pub async fn list_results(pool: &SqlitePool, event_id: Option<i64>) -> Result<Vec<ResultListing>> {
    let repo = ResultRepository::new(pool);
    match event_id {
        Some(event_id) => {
            EventRepository::new(pool).find_by_id(event_id).await?;
            repo.list_for_event(event_id).await
        }
        None => repo.list_recent().await,
    }
}

pub async fn record_result(pool: &SqlitePool, request: &RecordResultRequest) -> Result<EventResult> {
    ResultRepository::new(pool).create(request).await
}

pub async fn delete_result(pool: &SqlitePool, id: i64) -> Result<()> {
    ResultRepository::new(pool).delete(id).await
}
