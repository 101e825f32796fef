//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let activity = factory::create_activity(&db).await?;
//!     let member = factory::create_participant(&db, activity.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let activity = factory::activity::ActivityFactory::new(&db)
//!     .name("Chess Club")
//!     .max_participants(12)
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod activity_participant;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use activity::{create_activity, create_activity_with_name};
pub use activity_participant::{create_participant, create_participant_with_email};
