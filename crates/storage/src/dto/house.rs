use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_not_blank;

/// Request payload for creating a new house
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHouseRequest {
    #[validate(length(max = 100, message = "House name must be at most 100 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "House name is required"))]
    pub name: String,

    #[validate(length(max = 32))]
    pub color: Option<String>,
}

/// Request payload for changing a house colour; a blank or missing colour clears it
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateHouseColorRequest {
    #[validate(length(max = 32))]
    pub color: Option<String>,
}
