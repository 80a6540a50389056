use axum::extract::State;
use axum::response::{Html, Redirect};
use axum_extra::extract::SignedCookieJar;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::extractors::form::AppForm;
use crate::models::student::{SubmissionForm, validate_submission_form};
use crate::state::AppState;
use crate::students::{StudentStore, submit_student};
use crate::utils::flash;
use crate::views;

/// Render the submission form and any pending flash message.
pub async fn index(jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let (jar, message) = flash::take(jar);
    (jar, Html(views::index_page(message.as_deref())))
}

/// Handle the HTML form. Always redirects back to the form; the outcome is
/// reported through the flash message.
#[instrument(skip(state, jar, form), fields(name = %form.student_name, batch = %form.batch))]
pub async fn submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    AppForm(form): AppForm<SubmissionForm>,
) -> (SignedCookieJar, Redirect) {
    let message = match process_submission(&state, &form).await {
        Ok(message) | Err(message) => message,
    };
    (flash::set(jar, &message), Redirect::to("/"))
}

async fn process_submission(state: &AppState, form: &SubmissionForm) -> Result<String, String> {
    let student = validate_submission_form(form).map_err(|e| {
        info!("Rejected submission: {}", e.user_message());
        e.user_message().to_string()
    })?;

    let scored = submit_student(&state.db, &state.config.scoring, &student)
        .await
        .map_err(|e| format!("An error occurred: {e}"))?;

    Ok(format!(
        "Student {} submitted with predicted overall score: {:.2}",
        student.name, scored.score
    ))
}

/// Render the leaderboard.
#[instrument(skip(state))]
pub async fn top_students(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let entries = StudentStore::new(&state.db)
        .top_n(state.config.scoring.leaderboard_size)
        .await?;
    Ok(Html(views::leaderboard_page(&entries)))
}
