use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::house::{CreateHouseRequest, UpdateHouseColorRequest},
    models::House,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/houses",
    responses(
        (status = 200, description = "List all houses", body = Vec<House>)
    ),
    tag = "houses"
)]
pub async fn list_houses(State(db): State<Database>) -> Result<Response, WebError> {
    let houses = services::list_houses(db.pool()).await?;

    Ok(Json(houses).into_response())
}

#[utoipa::path(
    get,
    path = "/api/houses/{id}",
    params(
        ("id" = i64, Path, description = "House id")
    ),
    responses(
        (status = 200, description = "House found", body = House),
        (status = 404, description = "House not found")
    ),
    tag = "houses"
)]
pub async fn get_house(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let house = services::get_house(db.pool(), id).await?;

    Ok(Json(house).into_response())
}

#[utoipa::path(
    post,
    path = "/api/houses",
    request_body = CreateHouseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "House created", body = House),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "House name already exists")
    ),
    tag = "houses"
)]
pub async fn create_house(
    State(db): State<Database>,
    Json(req): Json<CreateHouseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let house = services::create_house(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(house)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/houses/{id}/color",
    params(
        ("id" = i64, Path, description = "House id")
    ),
    request_body = UpdateHouseColorRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Colour updated", body = House),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "House not found")
    ),
    tag = "houses"
)]
pub async fn update_house_color(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateHouseColorRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let house = services::update_house_color(db.pool(), id, req.color.as_deref()).await?;

    Ok(Json(house).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/houses/{id}",
    params(
        ("id" = i64, Path, description = "House id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "House and its results deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "House not found")
    ),
    tag = "houses"
)]
pub async fn delete_house(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_house(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
