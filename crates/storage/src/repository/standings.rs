use async_trait::async_trait;

use crate::Database;
use crate::dto::standings::StandingsFilter;
use crate::error::Result;
use crate::models::{Event, House, Placement};
use crate::services::standings::StandingsSource;

use super::event::EventRepository;
use super::house::HouseRepository;
use super::result::ResultRepository;

#[async_trait]
impl StandingsSource for Database {
    async fn list_houses(&self) -> Result<Vec<House>> {
        HouseRepository::new(self.pool()).list().await
    }

    async fn list_events(&self, filter: &StandingsFilter) -> Result<Vec<Event>> {
        EventRepository::new(self.pool()).list_filtered(filter).await
    }

    async fn list_results(&self, event_ids: &[i64]) -> Result<Vec<Placement>> {
        ResultRepository::new(self.pool())
            .list_placements(event_ids)
            .await
    }
}
