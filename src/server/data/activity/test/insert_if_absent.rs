use super::*;

/// Tests inserting a new catalog activity.
///
/// Expected: Ok with activity visible afterwards
#[tokio::test]
async fn inserts_new_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);
    repo.insert_if_absent(CreateActivityParam {
        name: "Chess Club".to_string(),
        description: "Learn strategies and compete in chess tournaments".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants: 12,
    })
    .await?;

    let found = repo.find_by_name("Chess Club").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().max_participants, 12);

    Ok(())
}

/// Tests inserting a name that already exists.
///
/// The existing row must be left untouched and no duplicate created.
///
/// Expected: Ok with one row carrying the original fields
#[tokio::test]
async fn keeps_existing_row_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);
    repo.insert_if_absent(CreateActivityParam {
        name: "Chess Club".to_string(),
        description: "Original description".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants: 12,
    })
    .await?;

    repo.insert_if_absent(CreateActivityParam {
        name: "Chess Club".to_string(),
        description: "Replacement description".to_string(),
        schedule: "Mondays, 3:30 PM - 5:00 PM".to_string(),
        max_participants: 99,
    })
    .await?;

    let activities = repo.get_all().await?;
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].description, "Original description");
    assert_eq!(activities[0].max_participants, 12);

    Ok(())
}
