pub mod config;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod regression;
pub mod split;

pub use config::ScoringConfig;
pub use error::ScoringError;
pub use features::{FEATURE_COUNT, FeatureVector, Sample};
pub use pipeline::{ScoreReport, score_candidate};
