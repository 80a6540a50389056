/// Number of predictors fed to the regression.
pub const FEATURE_COUNT: usize = 3;

/// The three submitted metrics used to predict a student's overall score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureVector {
    pub academic_performance: i32,
    pub hackathon_participation: i32,
    pub papers_presented: i32,
}

impl FeatureVector {
    pub fn new(
        academic_performance: i32,
        hackathon_participation: i32,
        papers_presented: i32,
    ) -> Self {
        Self {
            academic_performance,
            hackathon_participation,
            papers_presented,
        }
    }

    pub fn to_array(self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.academic_performance),
            f64::from(self.hackathon_participation),
            f64::from(self.papers_presented),
        ]
    }
}

/// One stored record as seen by the training step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub features: FeatureVector,
    /// `None` until the record has been scored.
    pub score: Option<f64>,
}

impl Sample {
    pub fn new(features: FeatureVector, score: Option<f64>) -> Self {
        Self { features, score }
    }

    /// Regression target for this record.
    ///
    /// Unscored records train as if their score were `0.0`. This pulls
    /// predictions toward zero while rows are pending, and is kept so that
    /// every stored row participates in the fit.
    pub fn target(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}
