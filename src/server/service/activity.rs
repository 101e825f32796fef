//! Activity service for roster business logic.
//!
//! This module provides the `ActivityService` for managing activity listings and
//! student signups. It validates signup and unregister requests against the
//! current roster state and owns the fixed detail strings the API contract
//! promises for precondition failures.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity::ActivityRepository,
    error::AppError,
    model::activity::{Activity, SignupParam, UnregisterParam},
};

/// Service providing business logic for activity rosters.
///
/// This struct holds a reference to the database connection and provides methods
/// for listing activities and mutating participant membership.
pub struct ActivityService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    /// Creates a new ActivityService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ActivityService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all activities with their participant rosters.
    ///
    /// # Returns
    /// - `Ok(Vec<Activity>)` - All activities with participants loaded
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Activity>, AppError> {
        let repo = ActivityRepository::new(self.db);
        let activities = repo.get_all().await?;
        Ok(activities)
    }

    /// Signs a student up for an activity.
    ///
    /// Verifies the activity exists, then enrolls the email through a single
    /// conditional insert. An email that is already enrolled affects no row and
    /// is reported as a conflict, so two racing signups for the same pair
    /// resolve to one success and one conflict.
    ///
    /// # Arguments
    /// - `param` - Signup parameters containing the activity name and email
    ///
    /// # Returns
    /// - `Ok(Activity)` - The activity the student was enrolled in
    /// - `Err(AppError::NotFound)` - No activity with the given name
    /// - `Err(AppError::Conflict)` - Email is already enrolled
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn signup(&self, param: SignupParam) -> Result<Activity, AppError> {
        let repo = ActivityRepository::new(self.db);

        // Validate activity exists
        let activity = repo
            .find_by_name(&param.activity_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

        let inserted = repo.add_participant(activity.id, &param.email).await?;
        if !inserted {
            return Err(AppError::Conflict(
                "Student is already signed up".to_string(),
            ));
        }

        Ok(activity)
    }

    /// Removes a student from an activity.
    ///
    /// Verifies the activity exists, then deletes the membership row. An email
    /// that is not enrolled deletes no row and is reported as a conflict.
    ///
    /// # Arguments
    /// - `param` - Unregister parameters containing the activity name and email
    ///
    /// # Returns
    /// - `Ok(Activity)` - The activity the student was removed from
    /// - `Err(AppError::NotFound)` - No activity with the given name
    /// - `Err(AppError::Conflict)` - Email is not enrolled in the activity
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn unregister(&self, param: UnregisterParam) -> Result<Activity, AppError> {
        let repo = ActivityRepository::new(self.db);

        // Validate activity exists
        let activity = repo
            .find_by_name(&param.activity_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

        let removed = repo.remove_participant(activity.id, &param.email).await?;
        if !removed {
            return Err(AppError::Conflict(
                "Student is not signed up for this activity".to_string(),
            ));
        }

        Ok(activity)
    }
}
