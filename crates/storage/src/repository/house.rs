use sqlx::SqlitePool;

use crate::dto::house::CreateHouseRequest;
use crate::error::{Result, StorageError};
use crate::models::House;

pub struct HouseRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> HouseRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all houses, by name
    pub async fn list(&self) -> Result<Vec<House>> {
        let houses = sqlx::query_as::<_, House>("SELECT id, name, color FROM houses ORDER BY name")
            .fetch_all(self.pool)
            .await?;

        Ok(houses)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<House> {
        sqlx::query_as::<_, House>("SELECT id, name, color FROM houses WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateHouseRequest) -> Result<House> {
        let color = normalize_color(req.color.as_deref());

        let house = sqlx::query_as::<_, House>(
            "INSERT INTO houses (name, color) VALUES (?, ?) RETURNING id, name, color",
        )
        .bind(req.name.trim())
        .bind(color)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_constraint(
                &format!("House '{}' already exists", req.name.trim()),
                "Invalid house reference",
            )
        })?;

        tracing::info!("Created house {} ({})", house.name, house.id);

        Ok(house)
    }

    /// Set or clear (blank/`None`) a house colour
    pub async fn update_color(&self, id: i64, color: Option<&str>) -> Result<House> {
        sqlx::query_as::<_, House>(
            "UPDATE houses SET color = ? WHERE id = ? RETURNING id, name, color",
        )
        .bind(normalize_color(color))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a house together with all of its results
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM houses WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM houses")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

fn normalize_color(color: Option<&str>) -> Option<&str> {
    color.map(str::trim).filter(|c| !c.is_empty())
}
