use sqlx::SqlitePool;
use storage::{
    dto::house::CreateHouseRequest, error::Result, models::House,
    repository::house::HouseRepository,
};

/// List all houses
pub async fn list_houses(pool: &SqlitePool) -> Result<Vec<House>> {
    HouseRepository::new(pool).list().await
}

pub async fn get_house(pool: &SqlitePool, id: i64) -> Result<House> {
    HouseRepository::new(pool).find_by_id(id).await
}

pub async fn create_house(pool: &SqlitePool, request: &CreateHouseRequest) -> Result<House> {
    HouseRepository::new(pool).create(request).await
}

pub async fn update_house_color(pool: &SqlitePool, id: i64, color: Option<&str>) -> Result<House> {
    HouseRepository::new(pool).update_color(id, color).await
}

/// Delete a house and its results
pub async fn delete_house(pool: &SqlitePool, id: i64) -> Result<()> {
    HouseRepository::new(pool).delete(id).await
}
