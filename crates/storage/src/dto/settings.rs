use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An empty PIN removes the admin PIN
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetAdminPinRequest {
    #[validate(length(max = 64))]
    pub pin: String,
}
