use common::{Sample, ScoringConfig, ScoringError, score_candidate};
use sea_orm::{ConnectionTrait, DbErr};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::entity::student;
use crate::models::student::NewStudent;

use super::store::StudentStore;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Scoring(#[from] ScoringError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A stored submission together with the prediction written to it.
#[derive(Debug, Clone)]
pub struct ScoredStudent {
    pub record: student::Model,
    /// Prediction written to the table.
    pub score: f64,
    pub r_squared: Option<f64>,
}

/// Store a validated submission, retrain on the whole table and write the
/// predicted score back.
///
/// The insert and the score update are separate statements. If scoring
/// fails, the row stays in the table with a NULL score.
#[instrument(skip(conn, config, student), fields(name = %student.name, batch = %student.batch))]
pub async fn submit_student<C: ConnectionTrait>(
    conn: &C,
    config: &ScoringConfig,
    student: &NewStudent,
) -> Result<ScoredStudent, SubmitError> {
    let store = StudentStore::new(conn);

    let id = store.insert(student).await?;

    let samples: Vec<Sample> = store
        .fetch_all()
        .await?
        .iter()
        .map(student::Model::sample)
        .collect();

    let report = score_candidate(&samples, student.features, config).inspect_err(|e| {
        warn!(id, records = samples.len(), "Scoring failed: {e}");
    })?;

    if !store
        .update_score(&student.name, &student.batch, report.score)
        .await?
    {
        warn!(id, "No row matched the submission when writing its score");
    }

    let record = store
        .find(id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("student {id}")))?;

    info!(id, score = report.score, "Student scored");

    Ok(ScoredStudent {
        record,
        score: report.score,
        r_squared: report.r_squared,
    })
}
