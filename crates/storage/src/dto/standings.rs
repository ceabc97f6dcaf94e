use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Event;

/// Exact-match event filter for standings. Unset fields match every event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
pub struct StandingsFilter {
    pub gender: Option<String>,
    pub category: Option<String>,
    /// `""` selects events without an age group.
    pub age_group: Option<String>,
}

impl StandingsFilter {
    /// Trims every field and drops blank ones, the way form inputs are read.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            gender: clean(self.gender),
            category: clean(self.category),
            age_group: clean(self.age_group),
        }
    }

    /// Same predicate the SQL repository applies, for in-memory sources.
    pub fn matches(&self, event: &Event) -> bool {
        let gender_ok = self.gender.as_ref().is_none_or(|g| *g == event.gender);
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|c| *c == event.category);
        let age_group_ok = self
            .age_group
            .as_ref()
            .is_none_or(|a| a.as_str() == event.age_group.as_deref().unwrap_or(""));

        gender_ok && category_ok && age_group_ok
    }
}

/// One house's aggregate over the matched events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StandingsRow {
    pub house_id: i64,
    pub name: String,
    pub color: Option<String>,
    pub points: i64,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsEntry {
    /// 1-based place in the table
    pub rank: i64,
    #[serde(flatten)]
    pub row: StandingsRow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct MedalTotals {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
}

impl MedalTotals {
    pub fn from_rows(rows: &[StandingsRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            gold: acc.gold + row.gold,
            silver: acc.silver + row.silver,
            bronze: acc.bronze + row.bronze,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    pub standings: Vec<StandingsEntry>,
    pub medal_totals: MedalTotals,
}

impl StandingsResponse {
    pub fn new(rows: Vec<StandingsRow>) -> Self {
        let medal_totals = MedalTotals::from_rows(&rows);
        let standings = rows
            .into_iter()
            .zip(1..)
            .map(|(row, rank)| StandingsEntry { rank, row })
            .collect();

        Self {
            standings,
            medal_totals,
        }
    }
}
