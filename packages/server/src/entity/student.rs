use common::{FeatureVector, Sample};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub batch: String,

    pub academic_performance: i32,
    pub hackathon_participation: i32,
    pub papers_presented: i32,

    /// NULL between insertion and scoring. Stays NULL if scoring failed.
    pub overall_score: Option<f64>,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(
            self.academic_performance,
            self.hackathon_participation,
            self.papers_presented,
        )
    }

    pub fn sample(&self) -> Sample {
        Sample::new(self.features(), self.overall_score)
    }
}
