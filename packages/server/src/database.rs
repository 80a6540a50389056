use std::time::Duration;

use sea_orm::sea_query::{Index, SqliteQueryBuilder};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::{info, warn};

use crate::entity::student;

pub async fn init_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    // Set connection pool options
    opt.max_connections(16)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("server::entity::*")
        .sync(&db)
        .await?;

    Ok(db)
}

/// Ensure required database indexes exist.
///
/// Schema-sync only creates the table itself, so secondary indexes are
/// created here on startup.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Score updates look rows up by value:
    // SELECT ... FROM students WHERE name = ? AND batch = ? ORDER BY id DESC
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_students_name_batch")
        .table(student::Entity)
        .col(student::Column::Name)
        .col(student::Column::Batch)
        .to_string(SqliteQueryBuilder);

    match db.execute_unprepared(&stmt).await {
        Ok(_) => {
            info!("Ensured index idx_students_name_batch exists");
        }
        Err(e) => {
            warn!("Failed to create index idx_students_name_batch: {}", e);
        }
    }

    Ok(())
}
