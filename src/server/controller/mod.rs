//! HTTP request handlers.
//!
//! Controllers extract request parameters, delegate to the service layer, and
//! convert domain models to DTOs for the response body.

pub mod activity;
