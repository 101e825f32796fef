//! Activity data repository for database operations.
//!
//! This module provides the `ActivityRepository` for managing activity records and
//! their participant memberships. Membership mutations are single conditional
//! statements guarded by the composite primary key on
//! `(activity_id, participant_email)`, so concurrent duplicate signups resolve to
//! a zero-row insert instead of a constraint violation.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::activity::{Activity, CreateActivityParam};

/// Repository providing database operations for activities and their rosters.
///
/// This struct borrows the request-scoped database connection and provides
/// methods for reading activities and mutating participant membership.
pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    /// Creates a new ActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ActivityRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all activities with their participant rosters.
    ///
    /// Loads every activity together with its membership rows in a single
    /// related query, ordered by activity name.
    ///
    /// # Returns
    /// - `Ok(Vec<Activity>)` - All activities with participant emails loaded
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Activity>, DbErr> {
        let rows = entity::prelude::Activity::find()
            .find_with_related(entity::prelude::ActivityParticipant)
            .order_by_asc(entity::activity::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(activity, members)| {
                let participants = members.into_iter().map(|m| m.participant_email).collect();
                Activity::from_entity(activity, participants)
            })
            .collect())
    }

    /// Finds an activity by its unique name.
    ///
    /// Queries the database for an activity with the specified name and returns
    /// its domain model with the participant roster loaded.
    ///
    /// # Arguments
    /// - `name` - Unique activity name
    ///
    /// # Returns
    /// - `Ok(Some(Activity))` - Activity found with participants loaded
    /// - `Ok(None)` - No activity with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DbErr> {
        let Some(activity) = entity::prelude::Activity::find()
            .filter(entity::activity::Column::Name.eq(name))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let participants = self.get_participants(activity.id).await?;

        Ok(Some(Activity::from_entity(activity, participants)))
    }

    /// Gets the participant emails for an activity, ordered by email.
    pub async fn get_participants(&self, activity_id: i32) -> Result<Vec<String>, DbErr> {
        let members = entity::prelude::ActivityParticipant::find()
            .filter(entity::activity_participant::Column::ActivityId.eq(activity_id))
            .order_by_asc(entity::activity_participant::Column::ParticipantEmail)
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(|m| m.participant_email).collect())
    }

    /// Checks whether an email is enrolled in an activity.
    ///
    /// # Arguments
    /// - `activity_id` - Activity to check
    /// - `email` - Participant email
    ///
    /// # Returns
    /// - `Ok(true)` - A membership row exists for the (activity, email) pair
    /// - `Ok(false)` - No such membership
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has_participant(&self, activity_id: i32, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ActivityParticipant::find()
            .filter(entity::activity_participant::Column::ActivityId.eq(activity_id))
            .filter(entity::activity_participant::Column::ParticipantEmail.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a participant to an activity if not already enrolled.
    ///
    /// Performs a single conditional insert guarded by the composite primary
    /// key: a duplicate (activity, email) pair affects no row rather than
    /// failing. Membership is not checked against `max_participants`; signups
    /// may exceed the stored capacity.
    ///
    /// # Arguments
    /// - `activity_id` - Activity to sign up for
    /// - `email` - Participant email
    ///
    /// # Returns
    /// - `Ok(true)` - Membership row inserted
    /// - `Ok(false)` - Email was already enrolled; nothing inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_participant(&self, activity_id: i32, email: &str) -> Result<bool, DbErr> {
        let rows_affected = entity::prelude::ActivityParticipant::insert(
            entity::activity_participant::ActiveModel {
                activity_id: ActiveValue::Set(activity_id),
                participant_email: ActiveValue::Set(email.to_string()),
                signed_up_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::activity_participant::Column::ActivityId,
                entity::activity_participant::Column::ParticipantEmail,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows_affected > 0)
    }

    /// Removes a participant from an activity.
    ///
    /// Deletes the membership row matching the (activity, email) pair. Removing
    /// a non-member affects no row and is reported through the return value.
    ///
    /// # Arguments
    /// - `activity_id` - Activity to unregister from
    /// - `email` - Participant email
    ///
    /// # Returns
    /// - `Ok(true)` - Membership row deleted
    /// - `Ok(false)` - No membership row matched; nothing deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove_participant(&self, activity_id: i32, email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ActivityParticipant::delete_many()
            .filter(entity::activity_participant::Column::ActivityId.eq(activity_id))
            .filter(entity::activity_participant::Column::ParticipantEmail.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Inserts an activity unless one with the same name already exists.
    ///
    /// Used by catalog seeding at startup. The insert is guarded by the unique
    /// name column, so repeated startups do not duplicate catalog rows.
    ///
    /// # Arguments
    /// - `param` - Activity creation parameters
    ///
    /// # Returns
    /// - `Ok(())` - Activity inserted or already present
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_if_absent(&self, param: CreateActivityParam) -> Result<(), DbErr> {
        let now = Utc::now();
        entity::prelude::Activity::insert(entity::activity::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            schedule: ActiveValue::Set(param.schedule),
            max_participants: ActiveValue::Set(param.max_participants),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::activity::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod test;
