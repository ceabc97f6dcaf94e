use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{event::CreateEventRequest, result::ClearResultsResponse},
    models::Event,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Response, WebError> {
    let events = services::list_events(db.pool()).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation error or malformed points schedule"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Event already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let points_schedule = req.resolve_schedule()?;

    let event = services::create_event(db.pool(), &req, &points_schedule).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Event and its results deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_event(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}/results",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All results of the event deleted", body = ClearResultsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn clear_event_results(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let deleted = services::clear_event_results(db.pool(), id).await?;

    Ok(Json(ClearResultsResponse { deleted }).into_response())
}
