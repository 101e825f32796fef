use super::*;

/// Tests enrolling a new email in an activity.
///
/// Verifies that the conditional insert reports a row was inserted and that
/// the membership is visible in the database afterwards.
///
/// Expected: Ok(true) with membership row created
#[tokio::test]
async fn enrolls_new_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let repo = ActivityRepository::new(db);
    let inserted = repo
        .add_participant(activity.id, "new@mergington.edu")
        .await?;

    assert!(inserted);
    assert!(repo
        .has_participant(activity.id, "new@mergington.edu")
        .await?);

    Ok(())
}

/// Tests enrolling the same email twice.
///
/// The second insert must affect no row and leave exactly one membership,
/// rather than failing on the composite primary key.
///
/// Expected: first Ok(true), second Ok(false), single membership row
#[tokio::test]
async fn reports_duplicate_without_inserting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let repo = ActivityRepository::new(db);
    let first = repo
        .add_participant(activity.id, "dup@mergington.edu")
        .await?;
    let second = repo
        .add_participant(activity.id, "dup@mergington.edu")
        .await?;

    assert!(first);
    assert!(!second);

    let participants = repo.get_participants(activity.id).await?;
    assert_eq!(participants, vec!["dup@mergington.edu".to_string()]);

    Ok(())
}

/// Tests that the same email can enroll in two different activities.
///
/// Expected: Ok(true) for both inserts
#[tokio::test]
async fn allows_same_email_across_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chess = factory::create_activity(db).await?;
    let art = factory::create_activity(db).await?;

    let repo = ActivityRepository::new(db);
    assert!(repo.add_participant(chess.id, "a@mergington.edu").await?);
    assert!(repo.add_participant(art.id, "a@mergington.edu").await?);

    Ok(())
}

/// Tests that enrollment is not checked against the stored capacity.
///
/// Membership may exceed max_participants; this documents the current
/// behavior of the roster layer.
///
/// Expected: Ok(true) beyond the stored maximum
#[tokio::test]
async fn allows_exceeding_max_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::ActivityFactory::new(db)
        .max_participants(1)
        .build()
        .await?;

    let repo = ActivityRepository::new(db);
    assert!(repo.add_participant(activity.id, "a@mergington.edu").await?);
    assert!(repo.add_participant(activity.id, "b@mergington.edu").await?);

    let participants = repo.get_participants(activity.id).await?;
    assert_eq!(participants.len(), 2);

    Ok(())
}
