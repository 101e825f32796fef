//! Participant factory for creating test membership entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a membership row for an activity with a generated unique email.
///
/// # Arguments
/// - `db` - Database connection
/// - `activity_id` - Activity the participant signs up for
///
/// # Returns
/// - `Ok(entity::activity_participant::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_participant(
    db: &DatabaseConnection,
    activity_id: i32,
) -> Result<entity::activity_participant::Model, DbErr> {
    let email = format!("student{}@mergington.edu", next_id());
    create_participant_with_email(db, activity_id, email).await
}

/// Creates a membership row for an activity with a specific email.
///
/// # Arguments
/// - `db` - Database connection
/// - `activity_id` - Activity the participant signs up for
/// - `email` - Participant email address
///
/// # Returns
/// - `Ok(entity::activity_participant::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert (including a duplicate
///   (activity, email) pair, which violates the composite primary key)
pub async fn create_participant_with_email(
    db: &DatabaseConnection,
    activity_id: i32,
    email: impl Into<String>,
) -> Result<entity::activity_participant::Model, DbErr> {
    entity::activity_participant::ActiveModel {
        activity_id: ActiveValue::Set(activity_id),
        participant_email: ActiveValue::Set(email.into()),
        signed_up_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory;

    #[tokio::test]
    async fn creates_participant_for_activity() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_activity_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let activity = factory::create_activity(db).await?;
        let member = create_participant(db, activity.id).await?;

        assert_eq!(member.activity_id, activity.id);
        assert!(member.participant_email.ends_with("@mergington.edu"));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_membership() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_activity_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let activity = factory::create_activity(db).await?;
        create_participant_with_email(db, activity.id, "dup@mergington.edu").await?;

        let result = create_participant_with_email(db, activity.id, "dup@mergington.edu").await;
        assert!(result.is_err());

        Ok(())
    }
}
