use common::FeatureVector;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::entity::student;
use crate::error::AppError;

/// Largest `limit` accepted by the leaderboard endpoint.
pub const MAX_LEADERBOARD_LIMIT: u64 = 100;

/// Raw fields posted by the HTML submission form.
///
/// Every field defaults to the empty string so a missing input fails
/// validation instead of rejecting the whole request.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(rename = "studentName", default)]
    pub student_name: String,
    #[serde(default)]
    pub batch: String,
    #[serde(rename = "academicPerformance", default)]
    pub academic_performance: String,
    #[serde(default)]
    pub hackathons: String,
    #[serde(default)]
    pub papers: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub batch: String,
    pub academic_performance: i32,
    pub hackathon_participation: i32,
    pub papers_presented: i32,
}

/// A validated submission, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub batch: String,
    pub features: FeatureVector,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
    pub batch: String,
    pub academic_performance: i32,
    pub hackathon_participation: i32,
    pub papers_presented: i32,
    pub overall_score: Option<f64>,
}

impl From<student::Model> for StudentResponse {
    fn from(m: student::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            batch: m.batch,
            academic_performance: m.academic_performance,
            hackathon_participation: m.hackathon_participation,
            papers_presented: m.papers_presented,
            overall_score: m.overall_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateStudentResponse {
    #[serde(flatten)]
    pub student: StudentResponse,
    /// Fit quality of the model that produced the score, on held-out rows.
    pub r_squared: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct LeaderboardEntry {
    pub name: String,
    pub overall_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<u64>,
}

/// Validate the HTML form: name and batch present, metrics made only of
/// ASCII digits.
pub fn validate_submission_form(form: &SubmissionForm) -> Result<NewStudent, AppError> {
    validate_identity(&form.student_name, &form.batch)?;

    let academic = parse_count("Academic performance", &form.academic_performance)?;
    let hackathons = parse_count("Hackathon participation", &form.hackathons)?;
    let papers = parse_count("Papers presented", &form.papers)?;

    Ok(NewStudent {
        name: form.student_name.clone(),
        batch: form.batch.clone(),
        features: FeatureVector::new(academic, hackathons, papers),
    })
}

pub fn validate_create_request(req: &CreateStudentRequest) -> Result<NewStudent, AppError> {
    validate_identity(&req.name, &req.batch)?;

    for (label, value) in [
        ("Academic performance", req.academic_performance),
        ("Hackathon participation", req.hackathon_participation),
        ("Papers presented", req.papers_presented),
    ] {
        if value < 0 {
            return Err(AppError::Validation(format!(
                "{label} must be a whole number of zero or more"
            )));
        }
    }

    Ok(NewStudent {
        name: req.name.clone(),
        batch: req.batch.clone(),
        features: FeatureVector::new(
            req.academic_performance,
            req.hackathon_participation,
            req.papers_presented,
        ),
    })
}

pub fn validate_leaderboard_limit(limit: u64) -> Result<u64, AppError> {
    if limit == 0 || limit > MAX_LEADERBOARD_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_LEADERBOARD_LIMIT}"
        )));
    }
    Ok(limit)
}

fn validate_identity(name: &str, batch: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::Validation("Student name is required".into()));
    }
    if batch.is_empty() {
        return Err(AppError::Validation("Batch is required".into()));
    }
    Ok(())
}

/// Parse a non-negative count. No sign, whitespace or decimal point allowed.
fn parse_count(label: &str, raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(format!(
            "{label} must be a whole number of zero or more"
        )));
    }
    raw.parse()
        .map_err(|_| AppError::Validation(format!("{label} is too large")))
}
