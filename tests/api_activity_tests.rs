//! Listing and landing-page endpoint tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use mergington::server::startup;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn get_activities_returns_seeded_catalog() {
    let (app, _db) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let activities = body.as_object().unwrap();
    assert_eq!(activities.len(), 9);

    let chess = &activities["Chess Club"];
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess["participants"].as_array().unwrap().len(), 0);

    let gym = &activities["Gym Class"];
    assert_eq!(gym["max_participants"], 30);
}

#[tokio::test]
async fn get_activities_reflects_signups() {
    let (app, _db) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/activities/Art%20Club/signup?email=painter@mergington.edu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let participants = body["Art Club"]["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0], "painter@mergington.edu");
}

#[tokio::test]
async fn root_redirects_to_landing_page() {
    let (app, _db) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn repeated_seeding_does_not_duplicate_catalog() {
    let (app, db) = common::create_test_app().await;

    // Simulate a second startup against the same database
    startup::seed_activities(&db).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body.as_object().unwrap().len(), 9);
}

#[tokio::test]
async fn repeated_seeding_preserves_existing_rosters() {
    let (app, db) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/activities/Math%20Club/signup?email=euler@mergington.edu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    startup::seed_activities(&db).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_json(response).await;
    let participants = body["Math Club"]["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0], "euler@mergington.edu");
}
