use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use crate::entity::student;
use crate::models::student::{LeaderboardEntry, NewStudent};

/// Persistence operations on the `students` table over a borrowed connection.
pub struct StudentStore<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> StudentStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Append an unscored row and return its id.
    pub async fn insert(&self, student: &NewStudent) -> Result<i32, DbErr> {
        let model = student::ActiveModel {
            name: Set(student.name.clone()),
            batch: Set(student.batch.clone()),
            academic_performance: Set(student.features.academic_performance),
            hackathon_participation: Set(student.features.hackathon_participation),
            papers_presented: Set(student.features.papers_presented),
            overall_score: Set(None),
            ..Default::default()
        };

        let inserted = model.insert(self.conn).await?;
        debug!(id = inserted.id, "Inserted student");
        Ok(inserted.id)
    }

    /// Set the score of the newest row with this `(name, batch)`.
    ///
    /// Rows are matched by value, not id: when the pair is duplicated, only
    /// the most recent row is touched. Returns `false` if nothing matched.
    pub async fn update_score(&self, name: &str, batch: &str, score: f64) -> Result<bool, DbErr> {
        let Some(target) = student::Entity::find()
            .filter(student::Column::Name.eq(name))
            .filter(student::Column::Batch.eq(batch))
            .order_by_desc(student::Column::Id)
            .one(self.conn)
            .await?
        else {
            return Ok(false);
        };

        let id = target.id;
        let mut active: student::ActiveModel = target.into();
        active.overall_score = Set(Some(score));
        active.update(self.conn).await?;

        debug!(id, score, "Updated student score");
        Ok(true)
    }

    pub async fn find(&self, id: i32) -> Result<Option<student::Model>, DbErr> {
        student::Entity::find_by_id(id).one(self.conn).await
    }

    /// Every stored row, oldest first.
    pub async fn fetch_all(&self) -> Result<Vec<student::Model>, DbErr> {
        student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(self.conn)
            .await
    }

    /// Highest scores first. Unscored rows sort last, ties by insertion order.
    pub async fn top_n(&self, n: u64) -> Result<Vec<LeaderboardEntry>, DbErr> {
        student::Entity::find()
            .select_only()
            .column(student::Column::Name)
            .column(student::Column::OverallScore)
            .order_by_with_nulls(
                student::Column::OverallScore,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(student::Column::Id)
            .limit(n)
            .into_model::<LeaderboardEntry>()
            .all(self.conn)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        student::Entity::find().count(self.conn).await
    }
}
