//! Activity factory for creating test activity entities.
//!
//! This module provides factory methods for creating activity entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test activities with customizable fields.
///
/// Provides a builder pattern for creating activity entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::activity::ActivityFactory;
///
/// let activity = ActivityFactory::new(&db)
///     .name("Chess Club")
///     .schedule("Fridays, 3:30 PM - 5:00 PM")
///     .max_participants(12)
///     .build()
///     .await?;
/// ```
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    schedule: String,
    max_participants: i32,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Activity {id}"` where id is auto-incremented
    /// - description: `"Description for activity {id}"`
    /// - schedule: `"Mondays, 3:30 PM - 4:30 PM"`
    /// - max_participants: `20`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ActivityFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Activity {}", id),
            description: format!("Description for activity {}", id),
            schedule: "Mondays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
        }
    }

    /// Sets the name for the activity.
    ///
    /// # Arguments
    /// - `name` - Unique display name for the activity
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the activity.
    ///
    /// # Arguments
    /// - `description` - Description text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the schedule text for the activity.
    ///
    /// # Arguments
    /// - `schedule` - Human-readable schedule text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    /// Sets the maximum participant count for the activity.
    ///
    /// # Arguments
    /// - `max_participants` - Maximum number of participants
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Builds and inserts the activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::activity::Model)` - Created activity entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        let now = Utc::now();
        entity::activity::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            schedule: ActiveValue::Set(self.schedule),
            max_participants: ActiveValue::Set(self.max_participants),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values.
///
/// Shorthand for `ActivityFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::activity::Model)` - Created activity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).build().await
}

/// Creates an activity with a specific name.
///
/// Shorthand for `ActivityFactory::new(db).name(name).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Unique activity name
///
/// # Returns
/// - `Ok(entity::activity::Model)` - Created activity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_activity_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).name(name).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_activity_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Activity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let activity = create_activity(db).await?;

        assert!(!activity.name.is_empty());
        assert!(!activity.description.is_empty());
        assert!(activity.max_participants > 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_activity_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Activity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let activity = ActivityFactory::new(db)
            .name("Chess Club")
            .description("Learn strategies and compete in chess tournaments")
            .schedule("Fridays, 3:30 PM - 5:00 PM")
            .max_participants(12)
            .build()
            .await?;

        assert_eq!(activity.name, "Chess Club");
        assert_eq!(activity.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(activity.max_participants, 12);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_activities() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Activity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let activity1 = create_activity(db).await?;
        let activity2 = create_activity(db).await?;

        assert_ne!(activity1.id, activity2.id);
        assert_ne!(activity1.name, activity2.name);

        Ok(())
    }
}
