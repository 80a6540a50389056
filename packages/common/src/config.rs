use serde::Deserialize;

/// Parameters of the score-prediction pipeline.
#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    /// Fraction of records held out to evaluate the fit. Default: 0.2.
    #[serde(default = "default_test_ratio")]
    pub test_ratio: f64,
    /// Seed of the train/test shuffle. Default: 42.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of students shown on the leaderboard. Default: 3.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: u64,
}

fn default_test_ratio() -> f64 {
    0.2
}
fn default_seed() -> u64 {
    42
}
fn default_leaderboard_size() -> u64 {
    3
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            test_ratio: default_test_ratio(),
            seed: default_seed(),
            leaderboard_size: default_leaderboard_size(),
        }
    }
}
