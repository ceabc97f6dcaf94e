use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::result::{RecordResultRequest, ResultListing};
use crate::error::{Result, StorageError};
use crate::models::{EventResult, Placement};

const LISTING_QUERY: &str = r#"
    SELECT r.id, r.event_id, e.name AS event_name, e.category, e.gender,
           COALESCE(e.age_group, '') AS age_group,
           r.house_id, h.name AS house_name, r.position,
           COALESCE(r.performance, '') AS performance, r.created_at
    FROM results r
    JOIN events e ON r.event_id = e.id
    JOIN houses h ON r.house_id = h.id
"#;

pub struct ResultRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Scoring columns of every result belonging to one of `event_ids`
    pub async fn list_placements(&self, event_ids: &[i64]) -> Result<Vec<Placement>> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT event_id, house_id, position FROM results WHERE event_id IN (");
        let mut ids = query.separated(", ");
        for id in event_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(")");

        let placements = query
            .build_query_as::<Placement>()
            .fetch_all(self.pool)
            .await?;

        Ok(placements)
    }

    /// All results, newest first
    pub async fn list_recent(&self) -> Result<Vec<ResultListing>> {
        let rows = sqlx::query_as::<_, ResultListing>(&format!(
            "{LISTING_QUERY} ORDER BY r.created_at DESC, r.id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Results of one event, by finishing position
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<ResultListing>> {
        let rows = sqlx::query_as::<_, ResultListing>(&format!(
            "{LISTING_QUERY} WHERE r.event_id = ? ORDER BY r.position"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Record a placement. Fails with a constraint violation if the position
    /// is already held in that event or the event/house does not exist.
    pub async fn create(&self, req: &RecordResultRequest) -> Result<EventResult> {
        let performance = req
            .performance
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        let result = sqlx::query_as::<_, EventResult>(
            r#"
            INSERT INTO results (event_id, house_id, position, performance)
            VALUES (?, ?, ?, ?)
            RETURNING id, event_id, house_id, position, performance, created_at
            "#,
        )
        .bind(req.event_id)
        .bind(req.house_id)
        .bind(req.position)
        .bind(performance)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_constraint(
                &format!(
                    "Position {} is already taken for this event",
                    req.position
                ),
                "Event or house does not exist",
            )
        })?;

        tracing::info!(
            "Recorded position {} for house {} in event {}",
            result.position,
            result.house_id,
            result.event_id
        );

        Ok(result)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM results WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Remove every result of an event, returning how many were deleted
    pub async fn clear_event(&self, event_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM results WHERE event_id = ?")
            .bind(event_id)
            .execute(self.pool)
            .await?;

        tracing::info!(
            "Cleared {} results from event {}",
            result.rows_affected(),
            event_id
        );

        Ok(result.rows_affected())
    }
}
