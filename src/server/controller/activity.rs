use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{activity::ActivityDto, api::MessageDto},
    server::{
        error::AppError,
        model::activity::{SignupParam, UnregisterParam},
        service::activity::ActivityService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET / - Redirect to the static landing page.
///
/// # Returns
/// - `302 Found`: Redirect to `/static/index.html`
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/static/index.html")],
    )
}

/// GET /activities - Get all activities with their participants
///
/// Returns every activity keyed by name. Each value carries the description,
/// schedule, maximum participant count, and the current participant emails.
///
/// # Returns
/// - `200 OK`: JSON object of activity name to activity DTO
/// - `500 Internal Server Error`: Database error
pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ActivityService::new(&state.db);
    let activities = service.get_all().await?;

    let activities_dto: HashMap<String, ActivityDto> = activities
        .into_iter()
        .map(|a| (a.name.clone(), a.into_dto()))
        .collect();

    Ok((StatusCode::OK, Json(activities_dto)))
}

/// POST /activities/{activity_name}/signup - Sign a student up for an activity
///
/// Enrolls the email given in the query string into the named activity. The
/// activity name arrives percent-decoded from the path.
///
/// # Path Parameters
/// - `activity_name`: Name of the activity
///
/// # Query Parameters
/// - `email`: Email identifying the student
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No activity with the given name
/// - `400 Bad Request`: Student is already signed up
/// - `500 Internal Server Error`: Database error
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ActivityService::new(&state.db);

    service
        .signup(SignupParam {
            activity_name: activity_name.clone(),
            email: query.email.clone(),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Signed up {} for {}", query.email, activity_name),
        }),
    ))
}

/// DELETE /activities/{activity_name}/unregister - Remove a student from an activity
///
/// Removes the email given in the query string from the named activity's roster.
///
/// # Path Parameters
/// - `activity_name`: Name of the activity
///
/// # Query Parameters
/// - `email`: Email identifying the student
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No activity with the given name
/// - `400 Bad Request`: Student is not signed up for this activity
/// - `500 Internal Server Error`: Database error
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ActivityService::new(&state.db);

    service
        .unregister(UnregisterParam {
            activity_name: activity_name.clone(),
            email: query.email.clone(),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Unregistered {} from {}", query.email, activity_name),
        }),
    ))
}
