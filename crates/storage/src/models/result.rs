use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A house's recorded placement in an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResult {
    pub id: i64,
    pub event_id: i64,
    pub house_id: i64,
    pub position: i64,
    pub performance: Option<String>,
    pub created_at: NaiveDateTime,
}

/// The columns of a result that scoring needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct Placement {
    pub event_id: i64,
    pub house_id: i64,
    pub position: i64,
}
