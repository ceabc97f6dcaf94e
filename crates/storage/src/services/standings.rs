use std::collections::HashMap;

use async_trait::async_trait;

use crate::dto::standings::{StandingsFilter, StandingsRow};
use crate::error::Result;
use crate::models::{Event, House, Placement, PointsSchedule};

/// Read access the standings calculator needs from a store.
#[async_trait]
pub trait StandingsSource: Send + Sync {
    /// Every house, ordered by name.
    async fn list_houses(&self) -> Result<Vec<House>>;

    async fn list_events(&self, filter: &StandingsFilter) -> Result<Vec<Event>>;

    /// Results belonging to any of `event_ids`. Empty input yields no results.
    async fn list_results(&self, event_ids: &[i64]) -> Result<Vec<Placement>>;
}

/// Ranks every house over the events matching `filter`.
///
/// Houses without matching results are still listed with zero totals. Store
/// failures propagate; malformed point schedules never do.
pub async fn compute_standings<S>(source: &S, filter: &StandingsFilter) -> Result<Vec<StandingsRow>>
where
    S: StandingsSource + ?Sized,
{
    let houses = source.list_houses().await?;
    let events = source.list_events(filter).await?;

    let results = if events.is_empty() {
        Vec::new()
    } else {
        let event_ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        source.list_results(&event_ids).await?
    };

    tracing::debug!(
        "Computing standings over {} houses, {} events, {} results",
        houses.len(),
        events.len(),
        results.len()
    );

    Ok(rank_houses(houses, &events, &results))
}

/// Aggregates points and medals per house and sorts the table.
///
/// Order is points, gold, silver, bronze (all descending). Full ties keep the
/// order of `houses`.
pub fn rank_houses(houses: Vec<House>, events: &[Event], results: &[Placement]) -> Vec<StandingsRow> {
    let schedules: HashMap<i64, PointsSchedule> = events
        .iter()
        .map(|event| (event.id, event.points_schedule()))
        .collect();

    let mut rows: Vec<StandingsRow> = houses
        .into_iter()
        .map(|house| StandingsRow {
            house_id: house.id,
            name: house.name,
            color: house.color,
            points: 0,
            gold: 0,
            silver: 0,
            bronze: 0,
        })
        .collect();

    let index: HashMap<i64, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.house_id, i))
        .collect();

    for result in results {
        let Some(&i) = index.get(&result.house_id) else {
            continue;
        };
        let row = &mut rows[i];

        let awarded = schedules
            .get(&result.event_id)
            .map_or(0, |schedule| schedule.points_for(result.position));
        row.points = row.points.saturating_add(awarded);

        match result.position {
            1 => row.gold += 1,
            2 => row.silver += 1,
            3 => row.bronze += 1,
            _ => {}
        }
    }

    rows.sort_by(|a, b| {
        (b.points, b.gold, b.silver, b.bronze).cmp(&(a.points, a.gold, a.silver, a.bronze))
    });

    rows
}
