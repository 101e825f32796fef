use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::server::{
    controller::activity::{
        get_activities, root, signup_for_activity, unregister_from_activity,
    },
    state::AppState,
};

pub fn router(static_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(get_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_from_activity),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
