use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::json::AppJson;
use crate::models::student::{
    CreateStudentRequest, CreateStudentResponse, LeaderboardEntry, LeaderboardQuery,
    StudentResponse, validate_create_request, validate_leaderboard_limit,
};
use crate::state::AppState;
use crate::students::{StudentStore, submit_student};

/// Store and score a student submitted as JSON.
#[instrument(skip(state, payload), fields(name = %payload.name, batch = %payload.batch))]
pub async fn create_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let student = validate_create_request(&payload)?;

    let scored = submit_student(&state.db, &state.config.scoring, &student).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateStudentResponse {
            student: StudentResponse::from(scored.record),
            r_squared: scored.r_squared,
        }),
    ))
}

/// List every stored student, oldest first.
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = StudentStore::new(&state.db).fetch_all().await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// Leaderboard as JSON.
#[instrument(skip(state))]
pub async fn top_students(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let limit = query.limit.unwrap_or(state.config.scoring.leaderboard_size);
    let limit = validate_leaderboard_limit(limit)?;
    let entries = StudentStore::new(&state.db).top_n(limit).await?;
    Ok(Json(entries))
}
