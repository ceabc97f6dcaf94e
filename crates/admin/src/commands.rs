use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use storage::{
    Database, compute_standings,
    dto::standings::{MedalTotals, StandingsFilter, StandingsRow},
    export::{ExportTable, export_csv},
    repository::settings::SettingsRepository,
    seed::{SeedSummary, seed_demo},
};

use crate::Result;

pub async fn seed(db: &Database) -> Result<SeedSummary> {
    Ok(seed_demo(db).await?)
}

/// Ranked standings rendered as a fixed-width text table
pub async fn standings(db: &Database, filter: &StandingsFilter) -> Result<String> {
    let rows = compute_standings(db, filter).await?;
    Ok(render_standings(&rows))
}

/// Writes `table` to `output`, or stdout when no path is given
pub async fn export(db: &Database, table: ExportTable, output: Option<&Path>) -> Result<usize> {
    let count = match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            let count = export_csv(db, table, &mut writer).await?;
            writer.flush()?;
            count
        }
        None => {
            let mut buffer = Vec::new();
            let count = export_csv(db, table, &mut buffer).await?;
            io::stdout().write_all(&buffer)?;
            count
        }
    };

    Ok(count)
}

pub async fn set_pin(db: &Database, pin: &str) -> Result<()> {
    SettingsRepository::new(db.pool()).set_admin_pin(pin).await?;
    Ok(())
}

pub fn render_standings(rows: &[StandingsRow]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("House".len());

    let mut out = format!(
        "{:>3}  {:<name_width$}  {:>6}  {:>4}  {:>6}  {:>6}\n",
        "#", "House", "Points", "Gold", "Silver", "Bronze"
    );
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>6}  {:>4}  {:>6}  {:>6}\n",
            i + 1,
            row.name,
            row.points,
            row.gold,
            row.silver,
            row.bronze
        ));
    }

    let totals = MedalTotals::from_rows(rows);
    out.push_str(&format!(
        "Medals: {} gold, {} silver, {} bronze\n",
        totals.gold, totals.silver, totals.bronze
    ));

    out
}
