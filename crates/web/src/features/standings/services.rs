use storage::{
    Database, compute_standings,
    dto::standings::{StandingsFilter, StandingsResponse},
    error::Result,
};

/// Current standings for `filter`, ranked, with medal totals
pub async fn get_standings(db: &Database, filter: &StandingsFilter) -> Result<StandingsResponse> {
    let rows = compute_standings(db, filter).await?;
    Ok(StandingsResponse::new(rows))
}
