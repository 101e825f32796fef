//! Activity domain models and parameters.
//!
//! Provides the domain model for extracurricular activities together with the
//! parameter types used by roster operations. An `Activity` is a transient view
//! over the stored activity row plus its membership rows, assembled per request
//! at the repository boundary.

use chrono::{DateTime, Utc};

use crate::model::activity::ActivityDto;

/// Activity with its current participant roster.
///
/// Carries the stored activity fields plus the list of enrolled participant
/// emails loaded from the membership table.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Database identifier of the activity.
    pub id: i32,
    /// Unique display name; the API identifies activities by name.
    pub name: String,
    /// Description shown to students.
    pub description: String,
    /// Human-readable schedule text.
    pub schedule: String,
    /// Maximum number of participants. Stored and reported, but membership is
    /// not checked against it (see `ActivityRepository::add_participant`).
    pub max_participants: i32,
    /// When the activity row was created.
    pub created_at: DateTime<Utc>,
    /// When the activity row was last updated.
    pub updated_at: DateTime<Utc>,
    /// Emails of currently enrolled participants.
    pub participants: Vec<String>,
}

impl Activity {
    /// Converts an entity model and its membership rows to a domain model at
    /// the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The activity entity model from the database
    /// - `participants` - Participant emails belonging to this activity
    ///
    /// # Returns
    /// - `Activity` - The converted activity domain model
    pub fn from_entity(entity: entity::activity::Model, participants: Vec<String>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            schedule: entity.schedule,
            max_participants: entity.max_participants,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            participants,
        }
    }

    /// Converts the activity domain model to a DTO for API responses.
    ///
    /// The name is dropped here; the listing endpoint keys its response map by
    /// activity name.
    ///
    /// # Returns
    /// - `ActivityDto` - The converted activity DTO
    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            description: self.description,
            schedule: self.schedule,
            max_participants: self.max_participants,
            participants: self.participants,
        }
    }
}

/// Parameters for creating an activity during catalog seeding.
#[derive(Debug, Clone)]
pub struct CreateActivityParam {
    /// Unique display name of the activity.
    pub name: String,
    /// Description shown to students.
    pub description: String,
    /// Human-readable schedule text.
    pub schedule: String,
    /// Maximum number of participants.
    pub max_participants: i32,
}

/// Parameters for signing a student up for an activity.
#[derive(Debug, Clone)]
pub struct SignupParam {
    /// Name of the activity to sign up for.
    pub activity_name: String,
    /// Email identifying the student.
    pub email: String,
}

/// Parameters for removing a student from an activity.
#[derive(Debug, Clone)]
pub struct UnregisterParam {
    /// Name of the activity to unregister from.
    pub activity_name: String,
    /// Email identifying the student.
    pub email: String,
}
