use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request payload for recording a placement
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordResultRequest {
    pub event_id: i64,
    pub house_id: i64,

    /// 1 = gold, 2 = silver, 3 = bronze, and so on
    #[validate(range(min = 1, message = "Position must be at least 1"))]
    pub position: i64,

    /// Free-text performance such as `12.34s` or `4.80m`
    #[validate(length(max = 100))]
    pub performance: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResultListFilter {
    /// Restrict the listing to one event, ordered by position
    pub event_id: Option<i64>,
}

/// A result joined with its event and house, for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResultListing {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub category: String,
    pub gender: String,
    pub age_group: String,
    pub house_id: i64,
    pub house_name: String,
    pub position: i64,
    pub performance: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClearResultsResponse {
    pub deleted: u64,
}
