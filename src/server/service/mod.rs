//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Rules**: Validating roster preconditions (activity exists,
//!   membership state) and mapping violations to the error taxonomy
//! - **Orchestration**: Coordinating repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod activity;
