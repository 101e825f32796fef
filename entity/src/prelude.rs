pub use super::activity::Entity as Activity;
pub use super::activity_participant::Entity as ActivityParticipant;
