//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an activity together with a number of enrolled participants.
///
/// Convenience method for roster tests that need an activity with existing
/// memberships. Participants get factory-generated unique emails.
///
/// # Arguments
/// - `db` - Database connection
/// - `participant_count` - Number of membership rows to create
///
/// # Returns
/// - `Ok((activity, participants))` - Created activity and its membership rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_activity_with_participants(
    db: &DatabaseConnection,
    participant_count: usize,
) -> Result<
    (
        entity::activity::Model,
        Vec<entity::activity_participant::Model>,
    ),
    DbErr,
> {
    let activity = crate::factory::activity::create_activity(db).await?;

    let mut participants = Vec::with_capacity(participant_count);
    for _ in 0..participant_count {
        participants
            .push(crate::factory::activity_participant::create_participant(db, activity.id).await?);
    }

    Ok((activity, participants))
}
