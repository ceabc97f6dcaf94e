use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::standings::StandingsFilter;
use crate::error::{Result, StorageError};
use crate::models::{Event, PointsSchedule};

const EVENT_COLUMNS: &str = "id, name, category, gender, age_group, points_json";

/// Fields of a new event after validation
pub struct NewEvent<'r> {
    pub name: &'r str,
    pub category: &'r str,
    pub gender: &'r str,
    pub age_group: Option<&'r str>,
    pub points_schedule: &'r PointsSchedule,
}

pub struct EventRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all events ordered for display
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY category, name, gender, COALESCE(age_group, '')"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Events matching every set field of `filter`
    pub async fn list_filtered(&self, filter: &StandingsFilter) -> Result<Vec<Event>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {EVENT_COLUMNS} FROM events WHERE 1=1"));

        if let Some(ref gender) = filter.gender {
            query.push(" AND gender = ");
            query.push_bind(gender);
        }

        if let Some(ref category) = filter.category {
            query.push(" AND category = ");
            query.push_bind(category);
        }

        if let Some(ref age_group) = filter.age_group {
            query.push(" AND COALESCE(age_group, '') = ");
            query.push_bind(age_group);
        }

        query.push(" ORDER BY id");

        let events = query.build_query_as::<Event>().fetch_all(self.pool).await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Event> {
        sqlx::query_as::<_, Event>(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, event: &NewEvent<'_>) -> Result<Event> {
        let age_group = event.age_group.map(str::trim).filter(|a| !a.is_empty());

        let created = sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (name, category, gender, age_group, points_json) \
             VALUES (?, ?, ?, ?, ?) RETURNING {EVENT_COLUMNS}"
        ))
        .bind(event.name.trim())
        .bind(event.category.trim())
        .bind(event.gender.trim())
        .bind(age_group)
        .bind(event.points_schedule.to_json())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_constraint(
                "Event with the same name, category, gender and age group already exists",
                "Invalid event reference",
            )
        })?;

        tracing::info!("Created event {} ({})", created.name, created.id);

        Ok(created)
    }

    /// Delete an event together with all of its results
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
