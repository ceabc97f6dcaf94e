use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use super::validate_not_blank;
use crate::models::{PointsSchedule, ScheduleError};

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(max = 100))]
    #[validate(custom(function = "validate_not_blank", message = "Event name is required"))]
    pub name: String,

    #[validate(length(max = 50))]
    #[validate(custom(function = "validate_not_blank", message = "Category is required"))]
    pub category: String,

    #[validate(length(max = 20))]
    #[validate(custom(function = "validate_not_blank", message = "Gender is required"))]
    pub gender: String,

    #[validate(length(max = 50))]
    pub age_group: Option<String>,

    /// Position to points, as a JSON object or its text form. Defaults to `{"1":5,"2":3,"3":1}`.
    #[schema(value_type = Option<Object>, example = json!({"1": 5, "2": 3, "3": 1}))]
    pub points_schedule: Option<Value>,
}

impl CreateEventRequest {
    pub fn resolve_schedule(&self) -> Result<PointsSchedule, ScheduleError> {
        match &self.points_schedule {
            None | Some(Value::Null) => Ok(PointsSchedule::default()),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(PointsSchedule::default()),
            Some(Value::String(text)) => PointsSchedule::parse(text),
            Some(value) => PointsSchedule::from_value(value),
        }
    }
}
