use tracing::info;

use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::features::{FEATURE_COUNT, FeatureVector, Sample};
use crate::regression::{LinearRegression, r2_score};
use crate::split::train_test_split;

/// Outcome of one retraining run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    /// Predicted overall score of the candidate.
    pub score: f64,
    /// Fit quality on the held-out partition, if defined.
    pub r_squared: Option<f64>,
    pub train_size: usize,
    pub test_size: usize,
}

/// Retrain on every stored sample and predict the candidate's score.
///
/// The model is built from scratch on each call and never cached, so the
/// prediction for a given candidate moves as the table grows.
pub fn score_candidate(
    samples: &[Sample],
    candidate: FeatureVector,
    config: &ScoringConfig,
) -> Result<ScoreReport, ScoringError> {
    let split = train_test_split(samples.len(), config.test_ratio, config.seed)?;

    let partition = |indices: &[usize]| -> (Vec<[f64; FEATURE_COUNT]>, Vec<f64>) {
        indices
            .iter()
            .map(|&i| (samples[i].features.to_array(), samples[i].target()))
            .unzip()
    };
    let (train_x, train_y) = partition(&split.train);
    let (test_x, test_y) = partition(&split.test);

    let model = LinearRegression::fit(&train_x, &train_y)?;

    let test_pred: Vec<f64> = test_x.iter().map(|x| model.predict(x)).collect();
    let r_squared = r2_score(&test_y, &test_pred);
    info!(
        r_squared = ?r_squared,
        intercept = model.intercept,
        coefficients = ?model.coefficients,
        train_size = train_x.len(),
        test_size = test_x.len(),
        "Model retrained"
    );

    let score = model.predict(&candidate.to_array());
    if !score.is_finite() {
        return Err(ScoringError::NonFinite);
    }

    Ok(ScoreReport {
        score,
        r_squared,
        train_size: train_x.len(),
        test_size: test_x.len(),
    })
}
