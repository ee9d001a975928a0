use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::{expect_affected, not_found};
use crate::error::AppError;
use crate::models::{DbTrainer, Trainer};

#[instrument(skip(pool))]
pub async fn create_trainer(pool: &Pool<Sqlite>, name: &str, age: i64) -> Result<i64, AppError> {
    info!("Creating trainer");
    let res = sqlx::query("INSERT INTO trainer (name, age) VALUES (?, ?)")
        .bind(name)
        .bind(age)
        .execute(pool)
        .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_trainers(pool: &Pool<Sqlite>) -> Result<Vec<Trainer>, AppError> {
    info!("Getting all trainers");
    let rows = sqlx::query_as::<_, DbTrainer>("SELECT id, name, age FROM trainer ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Trainer::from).collect())
}

#[instrument(skip(pool))]
pub async fn get_trainer(pool: &Pool<Sqlite>, id: i64) -> Result<Trainer, AppError> {
    info!("Fetching trainer by ID");
    let row = sqlx::query_as::<_, DbTrainer>("SELECT id, name, age FROM trainer WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(Trainer::from).ok_or_else(|| not_found("Trainer", id))
}

#[instrument(skip(pool))]
pub async fn update_trainer(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    age: i64,
) -> Result<(), AppError> {
    info!("Updating trainer");
    let res = sqlx::query("UPDATE trainer SET name = ?, age = ? WHERE id = ?")
        .bind(name)
        .bind(age)
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Trainer", id)
}

#[instrument(skip(pool))]
pub async fn delete_trainer(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting trainer");
    let res = sqlx::query("DELETE FROM trainer WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Trainer", id)
}
