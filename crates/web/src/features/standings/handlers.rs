use axum::{
    Json,
    extract::{Query, State},
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::standings::{StandingsFilter, StandingsResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/standings",
    params(StandingsFilter),
    responses(
        (status = 200, description = "House standings with medal totals", body = StandingsResponse)
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Query(filter): Query<StandingsFilter>,
) -> Result<Response, WebError> {
    let response = services::get_standings(&db, &filter.normalized()).await?;

    // Scoreboards poll this endpoint; never serve a stale table.
    Ok(([(CACHE_CONTROL, "no-store")], Json(response)).into_response())
}
