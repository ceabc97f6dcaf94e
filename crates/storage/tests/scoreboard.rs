use storage::{
    Database, compute_standings,
    dto::{
        house::CreateHouseRequest, result::RecordResultRequest, standings::StandingsFilter,
    },
    error::StorageError,
    export::{ExportTable, export_csv},
    models::{Event, House, PointsSchedule},
    repository::{
        event::{EventRepository, NewEvent},
        house::HouseRepository,
        result::ResultRepository,
        settings::SettingsRepository,
    },
    seed::seed_demo,
};

async fn setup() -> Database {
    let db = Database::in_memory().await.unwrap();
    db.run_migrations().await.unwrap();
    db
}

async fn house(db: &Database, name: &str) -> House {
    HouseRepository::new(db.pool())
        .create(&CreateHouseRequest {
            name: name.to_string(),
            color: None,
        })
        .await
        .unwrap()
}

async fn event(db: &Database, name: &str, category: &str, gender: &str) -> Event {
    EventRepository::new(db.pool())
        .create(&NewEvent {
            name,
            category,
            gender,
            age_group: None,
            points_schedule: &PointsSchedule::default(),
        })
        .await
        .unwrap()
}

async fn record(db: &Database, event: &Event, house: &House, position: i64) {
    ResultRepository::new(db.pool())
        .create(&RecordResultRequest {
            event_id: event.id,
            house_id: house.id,
            position,
            performance: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_duplicate_position_is_rejected_and_existing_result_kept() {
    let db = setup().await;
    let merah = house(&db, "Merah").await;
    let biru = house(&db, "Biru").await;
    let sprint = event(&db, "100m", "Track", "M").await;
    record(&db, &sprint, &merah, 1).await;

    let err = ResultRepository::new(db.pool())
        .create(&RecordResultRequest {
            event_id: sprint.id,
            house_id: biru.id,
            position: 1,
            performance: Some("12.00s".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));

    let results = ResultRepository::new(db.pool())
        .list_for_event(sprint.id)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].house_name, "Merah");
    assert_eq!(results[0].position, 1);
}

#[tokio::test]
async fn test_result_requires_existing_event_and_house() {
    let db = setup().await;
    let merah = house(&db, "Merah").await;

    let err = ResultRepository::new(db.pool())
        .create(&RecordResultRequest {
            event_id: 404,
            house_id: merah.id,
            position: 1,
            performance: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
}

#[tokio::test]
async fn test_duplicate_house_and_event_are_rejected() {
    let db = setup().await;
    house(&db, "Merah").await;
    event(&db, "100m", "Track", "M").await;

    let house_err = HouseRepository::new(db.pool())
        .create(&CreateHouseRequest {
            name: " Merah ".to_string(),
            color: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(house_err, StorageError::ConstraintViolation(_)));

    let event_err = EventRepository::new(db.pool())
        .create(&NewEvent {
            name: "100m",
            category: "Track",
            gender: "M",
            age_group: Some("  "),
            points_schedule: &PointsSchedule::default(),
        })
        .await
        .unwrap_err();
    assert!(matches!(event_err, StorageError::ConstraintViolation(_)));

    // A different age group is a different event.
    EventRepository::new(db.pool())
        .create(&NewEvent {
            name: "100m",
            category: "Track",
            gender: "M",
            age_group: Some("Under 12"),
            points_schedule: &PointsSchedule::default(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deleting_parents_cascades_to_results() {
    let db = setup().await;
    let merah = house(&db, "Merah").await;
    let biru = house(&db, "Biru").await;
    let sprint = event(&db, "100m", "Track", "M").await;
    let jump = event(&db, "Long Jump", "Field", "M").await;
    record(&db, &sprint, &merah, 1).await;
    record(&db, &sprint, &biru, 2).await;
    record(&db, &jump, &biru, 1).await;

    HouseRepository::new(db.pool()).delete(merah.id).await.unwrap();
    let remaining = ResultRepository::new(db.pool()).list_recent().await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|r| r.house_name == "Biru"));

    EventRepository::new(db.pool()).delete(jump.id).await.unwrap();
    let remaining = ResultRepository::new(db.pool()).list_recent().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].event_id, sprint.id);

    let err = HouseRepository::new(db.pool()).delete(merah.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_clear_event_only_touches_that_event() {
    let db = setup().await;
    let merah = house(&db, "Merah").await;
    let sprint = event(&db, "100m", "Track", "M").await;
    let jump = event(&db, "Long Jump", "Field", "M").await;
    record(&db, &sprint, &merah, 1).await;
    record(&db, &sprint, &merah, 2).await;
    record(&db, &jump, &merah, 1).await;

    let repo = ResultRepository::new(db.pool());
    assert_eq!(repo.clear_event(sprint.id).await.unwrap(), 2);
    assert!(repo.list_for_event(sprint.id).await.unwrap().is_empty());
    assert_eq!(repo.list_for_event(jump.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_standings_from_database_respect_category_filter() {
    let db = setup().await;
    let merah = house(&db, "Merah").await;
    let biru = house(&db, "Biru").await;
    let hijau = house(&db, "Hijau").await;
    let sprint = event(&db, "100m", "Track", "M").await;
    let shot = event(&db, "Shot Put", "Field", "F").await;
    record(&db, &sprint, &merah, 1).await;
    record(&db, &sprint, &biru, 2).await;
    record(&db, &shot, &biru, 1).await;
    record(&db, &shot, &hijau, 3).await;

    let all = compute_standings(&db, &StandingsFilter::default())
        .await
        .unwrap();
    let summary: Vec<(&str, i64)> = all.iter().map(|r| (r.name.as_str(), r.points)).collect();
    assert_eq!(summary, vec![("Biru", 8), ("Merah", 5), ("Hijau", 1)]);

    let track = compute_standings(
        &db,
        &StandingsFilter {
            category: Some("Track".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let summary: Vec<(&str, i64, i64, i64)> = track
        .iter()
        .map(|r| (r.name.as_str(), r.points, r.gold, r.bronze))
        .collect();
    assert_eq!(
        summary,
        vec![("Merah", 5, 1, 0), ("Biru", 3, 0, 0), ("Hijau", 0, 0, 0)]
    );
}

#[tokio::test]
async fn test_empty_age_group_filter_selects_events_without_age_group() {
    let db = setup().await;
    let merah = house(&db, "Merah").await;
    let open = event(&db, "100m", "Track", "M").await;
    let junior = EventRepository::new(db.pool())
        .create(&NewEvent {
            name: "100m",
            category: "Track",
            gender: "M",
            age_group: Some("Under 12"),
            points_schedule: &PointsSchedule::default(),
        })
        .await
        .unwrap();
    record(&db, &open, &merah, 2).await;
    record(&db, &junior, &merah, 1).await;

    let rows = compute_standings(
        &db,
        &StandingsFilter {
            age_group: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(rows[0].points, 3);
    assert_eq!(rows[0].silver, 1);
    assert_eq!(rows[0].gold, 0);
}

#[tokio::test]
async fn test_unparsable_stored_schedule_scores_as_default() {
    let db = setup().await;
    let merah = house(&db, "Merah").await;
    let sprint = event(&db, "100m", "Track", "M").await;
    sqlx::query("UPDATE events SET points_json = 'garbage' WHERE id = ?")
        .bind(sprint.id)
        .execute(db.pool())
        .await
        .unwrap();
    record(&db, &sprint, &merah, 1).await;
    record(&db, &sprint, &merah, 3).await;

    let rows = compute_standings(&db, &StandingsFilter::default())
        .await
        .unwrap();

    assert_eq!(rows[0].points, 6);
}

#[tokio::test]
async fn test_house_color_update_and_clear() {
    let db = setup().await;
    let merah = house(&db, "Merah").await;
    let repo = HouseRepository::new(db.pool());

    let updated = repo.update_color(merah.id, Some(" #ff0000 ")).await.unwrap();
    assert_eq!(updated.color.as_deref(), Some("#ff0000"));

    let cleared = repo.update_color(merah.id, Some("")).await.unwrap();
    assert_eq!(cleared.color, None);

    assert!(matches!(
        repo.update_color(999, None).await.unwrap_err(),
        StorageError::NotFound
    ));
}

#[tokio::test]
async fn test_admin_pin_round_trip() {
    let db = setup().await;
    let settings = SettingsRepository::new(db.pool());

    assert_eq!(settings.admin_pin().await.unwrap(), None);

    settings.set_admin_pin("1234").await.unwrap();
    assert_eq!(settings.admin_pin().await.unwrap().as_deref(), Some("1234"));

    settings.set_admin_pin("").await.unwrap();
    assert_eq!(settings.admin_pin().await.unwrap(), None);
}

#[tokio::test]
async fn test_seed_demo_is_idempotent() {
    let db = setup().await;

    let first = seed_demo(&db).await.unwrap();
    assert_eq!((first.houses, first.events), (4, 4));

    let second = seed_demo(&db).await.unwrap();
    assert_eq!((second.houses, second.events), (0, 0));

    let houses = HouseRepository::new(db.pool()).list().await.unwrap();
    let names: Vec<&str> = houses.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Biru", "Hijau", "Kuning", "Merah"]);
}

#[tokio::test]
async fn test_export_writes_header_and_rows() {
    let db = setup().await;
    house(&db, "Merah").await;

    let mut houses = Vec::new();
    let count = export_csv(&db, ExportTable::Houses, &mut houses)
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(String::from_utf8(houses).unwrap(), "id,name,color\n1,Merah,\n");

    let mut results = Vec::new();
    let count = export_csv(&db, ExportTable::Results, &mut results)
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(
        String::from_utf8(results).unwrap(),
        "id,event_id,house_id,position,performance,created_at\n"
    );
}
