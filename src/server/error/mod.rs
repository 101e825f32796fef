//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type and implements `IntoResponse` for automatic error
//! handling in API endpoints.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure variants use `#[from]` for
/// automatic error conversion, while `NotFound` and `Conflict` carry the fixed detail
/// strings the API contract promises.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Surfaces as a startup failure; configuration issues prevent normal
    /// application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided detail message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with the current roster state (duplicate signup or
    /// removing a non-member).
    ///
    /// Results in 400 Bad Request with the provided detail message.
    ///
    /// # Fields
    /// - Message describing the conflicting precondition
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Internal errors are logged with full details but return a generic message to
/// avoid information leakage.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - 400 Bad Request - For `Conflict` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { detail })).into_response()
            }
            Self::Conflict(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { detail })).into_response()
            }
            err => {
                tracing::error!("{}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        detail: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
