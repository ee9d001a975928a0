use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::{expect_affected, not_found};
use crate::error::{AppError, unique_violation_as_conflict};
use crate::models::{Absence, DbAbsence};

#[instrument(skip(pool))]
pub async fn create_absence(
    pool: &Pool<Sqlite>,
    train_id: i64,
    student_id: i64,
) -> Result<i64, AppError> {
    info!("Recording absence");
    let res = sqlx::query("INSERT INTO absence (train_id, student_id) VALUES (?, ?)")
        .bind(train_id)
        .bind(student_id)
        .execute(pool)
        .await
        .map_err(|e| {
            unique_violation_as_conflict(e, "Absence already recorded for this session")
        })?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_absences(
    pool: &Pool<Sqlite>,
    train_id: Option<i64>,
) -> Result<Vec<Absence>, AppError> {
    info!("Getting absences");
    let rows = match train_id {
        Some(train_id) => {
            sqlx::query_as::<_, DbAbsence>(
                "SELECT id, train_id, student_id FROM absence WHERE train_id = ? ORDER BY id",
            )
            .bind(train_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbAbsence>(
                "SELECT id, train_id, student_id FROM absence ORDER BY id",
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.into_iter().map(Absence::from).collect())
}

#[instrument(skip(pool))]
pub async fn get_absence(pool: &Pool<Sqlite>, id: i64) -> Result<Absence, AppError> {
    info!("Fetching absence by ID");
    let row = sqlx::query_as::<_, DbAbsence>(
        "SELECT id, train_id, student_id FROM absence WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Absence::from).ok_or_else(|| not_found("Absence", id))
}

#[instrument(skip(pool))]
pub async fn delete_absence(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting absence");
    let res = sqlx::query("DELETE FROM absence WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Absence", id)
}
