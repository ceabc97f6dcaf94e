//! CSV export of the raw tables, ordered by id.

use std::io::Write;

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use crate::Database;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTable {
    Houses,
    Events,
    Results,
}

impl ExportTable {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Houses => "houses.csv",
            Self::Events => "events.csv",
            Self::Results => "results.csv",
        }
    }
}

impl std::str::FromStr for ExportTable {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "houses" => Ok(Self::Houses),
            "events" => Ok(Self::Events),
            "results" => Ok(Self::Results),
            other => Err(format!(
                "unknown table '{}', expected houses, events or results",
                other
            )),
        }
    }
}

#[derive(Serialize, FromRow)]
struct HouseRecord {
    id: i64,
    name: String,
    color: Option<String>,
}

#[derive(Serialize, FromRow)]
struct EventRecord {
    id: i64,
    name: String,
    category: String,
    gender: String,
    age_group: Option<String>,
    points_json: Option<String>,
}

#[derive(Serialize, FromRow)]
struct ResultRecord {
    id: i64,
    event_id: i64,
    house_id: i64,
    position: i64,
    performance: Option<String>,
    created_at: NaiveDateTime,
}

/// Writes `table` as CSV with a header row, returning the number of data rows.
pub async fn export_csv<W: Write>(db: &Database, table: ExportTable, writer: W) -> Result<usize> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let count = match table {
        ExportTable::Houses => {
            let rows = sqlx::query_as::<_, HouseRecord>(
                "SELECT id, name, color FROM houses ORDER BY id",
            )
            .fetch_all(db.pool())
            .await?;
            write_rows(&mut csv, &["id", "name", "color"], &rows)?
        }
        ExportTable::Events => {
            let rows = sqlx::query_as::<_, EventRecord>(
                "SELECT id, name, category, gender, age_group, points_json FROM events ORDER BY id",
            )
            .fetch_all(db.pool())
            .await?;
            write_rows(
                &mut csv,
                &["id", "name", "category", "gender", "age_group", "points_json"],
                &rows,
            )?
        }
        ExportTable::Results => {
            let rows = sqlx::query_as::<_, ResultRecord>(
                "SELECT id, event_id, house_id, position, performance, created_at FROM results ORDER BY id",
            )
            .fetch_all(db.pool())
            .await?;
            write_rows(
                &mut csv,
                &["id", "event_id", "house_id", "position", "performance", "created_at"],
                &rows,
            )?
        }
    };

    csv.flush().map_err(csv::Error::from)?;

    tracing::info!("Exported {} rows from {}", count, table.file_name());

    Ok(count)
}

// Headers are written by hand so empty tables still get a header row.
fn write_rows<W: Write, T: Serialize>(
    csv: &mut csv::Writer<W>,
    header: &[&str],
    rows: &[T],
) -> Result<usize> {
    csv.write_record(header)?;
    for row in rows {
        csv.serialize(row)?;
    }
    Ok(rows.len())
}
