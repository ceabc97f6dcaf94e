use crate::Database;
use crate::dto::house::CreateHouseRequest;
use crate::error::Result;
use crate::models::PointsSchedule;
use crate::repository::event::{EventRepository, NewEvent};
use crate::repository::house::HouseRepository;

const DEMO_HOUSES: &[(&str, &str)] = &[
    ("Merah", "#ff0000"),
    ("Biru", "#0057ff"),
    ("Hijau", "#0bbf5e"),
    ("Kuning", "#ffcc00"),
];

const DEMO_EVENTS: &[(&str, &str, &str, &str)] = &[
    ("100m", "Balapan", "L", "Bawah 12"),
    ("100m", "Balapan", "P", "Bawah 12"),
    ("Lompat Jauh", "Padang", "L", "Terbuka"),
    ("Lontar Peluru", "Padang", "P", "Terbuka"),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub houses: usize,
    pub events: usize,
}

/// Fills empty house and event tables with demo data. Tables that already
/// hold rows are left alone.
pub async fn seed_demo(db: &Database) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    let houses = HouseRepository::new(db.pool());
    if houses.count().await? == 0 {
        for (name, color) in DEMO_HOUSES {
            houses
                .create(&CreateHouseRequest {
                    name: name.to_string(),
                    color: Some(color.to_string()),
                })
                .await?;
            summary.houses += 1;
        }
    }

    let events = EventRepository::new(db.pool());
    if events.count().await? == 0 {
        let schedule = PointsSchedule::default();
        for (name, category, gender, age_group) in DEMO_EVENTS {
            events
                .create(&NewEvent {
                    name,
                    category,
                    gender,
                    age_group: Some(*age_group),
                    points_schedule: &schedule,
                })
                .await?;
            summary.events += 1;
        }
    }

    tracing::info!(
        "Seeded {} demo houses and {} demo events",
        summary.houses,
        summary.events
    );

    Ok(summary)
}
