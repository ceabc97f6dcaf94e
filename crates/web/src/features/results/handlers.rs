use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::result::{RecordResultRequest, ResultListFilter, ResultListing},
    models::EventResult,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    params(ResultListFilter),
    responses(
        (status = 200, description = "Recorded results", body = Vec<ResultListing>),
        (status = 404, description = "Event not found")
    ),
    tag = "results"
)]
pub async fn list_results(
    State(db): State<Database>,
    Query(filter): Query<ResultListFilter>,
) -> Result<Response, WebError> {
    let results = services::list_results(db.pool(), filter.event_id).await?;

    Ok(Json(results).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = RecordResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result recorded", body = EventResult),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Position already taken, or unknown event or house")
    ),
    tag = "results"
)]
pub async fn record_result(
    State(db): State<Database>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::record_result(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(result)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Result id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Result deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_result(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
