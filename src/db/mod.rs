pub mod absence;
pub mod report;
pub mod student;
pub mod team;
pub mod team_trainer;
pub mod tournament;
pub mod train;
pub mod trainer;
pub mod user;

pub use absence::*;
pub use report::*;
pub use student::*;
pub use team::*;
pub use team_trainer::*;
pub use tournament::*;
pub use train::*;
pub use trainer::*;
pub use user::*;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteQueryResult};
use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use crate::error::AppError;

/// Opens the pool with foreign key enforcement on every connection, so the
/// cascades declared in the schema actually fire.
#[instrument]
pub async fn connect(database_url: &str) -> Result<Pool<Sqlite>, AppError> {
    info!("Connecting to SQLite database");
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Turns "no row matched" on an UPDATE or DELETE into `NotFound`.
pub(crate) fn expect_affected(
    result: SqliteQueryResult,
    entity: &str,
    id: i64,
) -> Result<(), AppError> {
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "{} with id {} not found in database",
            entity, id
        )));
    }

    Ok(())
}

pub(crate) fn not_found(entity: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} with id {} not found in database", entity, id))
}
