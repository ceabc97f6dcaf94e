//! In-memory [`StandingsSource`] for tests and demos.

use async_trait::async_trait;

use crate::dto::standings::StandingsFilter;
use crate::error::Result;
use crate::models::{Event, House, Placement};
use crate::services::standings::StandingsSource;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    houses: Vec<House>,
    events: Vec<Event>,
    results: Vec<Placement>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_house(mut self, id: i64, name: &str, color: Option<&str>) -> Self {
        self.houses.push(House {
            id,
            name: name.to_string(),
            color: color.map(String::from),
        });
        self
    }

    pub fn with_event(
        mut self,
        id: i64,
        name: &str,
        category: &str,
        gender: &str,
        age_group: Option<&str>,
        points_json: Option<&str>,
    ) -> Self {
        self.events.push(Event {
            id,
            name: name.to_string(),
            category: category.to_string(),
            gender: gender.to_string(),
            age_group: age_group.map(String::from),
            points_json: points_json.map(String::from),
        });
        self
    }

    pub fn with_result(mut self, event_id: i64, house_id: i64, position: i64) -> Self {
        self.results.push(Placement {
            event_id,
            house_id,
            position,
        });
        self
    }
}

#[async_trait]
impl StandingsSource for MemoryStore {
    async fn list_houses(&self) -> Result<Vec<House>> {
        let mut houses = self.houses.clone();
        houses.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(houses)
    }

    async fn list_events(&self, filter: &StandingsFilter) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect())
    }

    async fn list_results(&self, event_ids: &[i64]) -> Result<Vec<Placement>> {
        Ok(self
            .results
            .iter()
            .filter(|result| event_ids.contains(&result.event_id))
            .copied()
            .collect())
    }
}
