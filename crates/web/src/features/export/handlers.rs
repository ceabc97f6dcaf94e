use axum::{
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    export::{ExportTable, export_csv},
};

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/export/{file}",
    params(
        ("file" = String, Path, description = "houses.csv, events.csv or results.csv")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 400, description = "Unknown table"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "export"
)]
pub async fn export_table(
    State(db): State<Database>,
    Path(file): Path<String>,
) -> Result<Response, WebError> {
    let table: ExportTable = file
        .strip_suffix(".csv")
        .unwrap_or(&file)
        .parse()
        .map_err(WebError::BadRequest)?;

    let mut body = Vec::new();
    export_csv(&db, table, &mut body).await?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", table.file_name()),
            ),
        ],
        body,
    )
        .into_response())
}
