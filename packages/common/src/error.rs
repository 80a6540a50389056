use thiserror::Error;

/// Reasons the score-prediction pipeline can refuse to produce a score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error(
        "Not enough records to train a model: {records} record(s) split into {train} for training and {test} for testing"
    )]
    InsufficientData {
        records: usize,
        train: usize,
        test: usize,
    },

    #[error("Test ratio must be strictly between 0 and 1, got {0}")]
    InvalidRatio(f64),

    #[error("Training data has {features} feature rows but {targets} targets")]
    LengthMismatch { features: usize, targets: usize },

    #[error("Model produced a non-finite prediction")]
    NonFinite,
}
