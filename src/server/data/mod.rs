//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! return domain models to maintain separation between the data layer and business
//! logic layer. Repositories borrow the request-scoped database connection and never
//! open connections of their own.

pub mod activity;
