use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().nest("/students", student_routes())
}

fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::student::list_students).post(handlers::student::create_student),
        )
        .route("/top", get(handlers::student::top_students))
}
