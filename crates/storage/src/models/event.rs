use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::PointsSchedule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub gender: String,
    pub age_group: Option<String>,
    /// Raw schedule text as stored; see [`Event::points_schedule`].
    pub points_json: Option<String>,
}

impl Event {
    /// The event's schedule, or the default one if the stored text is unusable.
    pub fn points_schedule(&self) -> PointsSchedule {
        PointsSchedule::from_stored(self.points_json.as_deref())
    }
}
