use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::settings::SetAdminPinRequest, repository::settings::SettingsRepository};
use validator::Validate;

use crate::error::WebError;

#[utoipa::path(
    put,
    path = "/api/settings/admin-pin",
    request_body = SetAdminPinRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Admin PIN set, or cleared when empty"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings"
)]
pub async fn set_admin_pin(
    State(db): State<Database>,
    Json(req): Json<SetAdminPinRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    SettingsRepository::new(db.pool())
        .set_admin_pin(&req.pin)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
