use chrono::NaiveDateTime;
use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::{expect_affected, not_found};
use crate::error::AppError;
use crate::models::{DbTrain, Train};

const TRAIN_COLUMNS: &str = "SELECT id, type AS kind, room, datetime,
        id_trainer AS trainer_id, id_team AS team_id
     FROM train";

#[instrument(skip(pool))]
pub async fn create_train(
    pool: &Pool<Sqlite>,
    kind: &str,
    room: &str,
    datetime: NaiveDateTime,
    trainer_id: i64,
    team_id: i64,
) -> Result<i64, AppError> {
    info!("Creating training session");
    let res = sqlx::query(
        "INSERT INTO train (type, room, datetime, id_trainer, id_team)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(kind)
    .bind(room)
    .bind(datetime)
    .bind(trainer_id)
    .bind(team_id)
    .execute(pool)
    .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_trains(pool: &Pool<Sqlite>) -> Result<Vec<Train>, AppError> {
    info!("Getting all training sessions");
    let rows = sqlx::query_as::<_, DbTrain>(&format!("{} ORDER BY id", TRAIN_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Train::from).collect())
}

#[instrument(skip(pool))]
pub async fn get_train(pool: &Pool<Sqlite>, id: i64) -> Result<Train, AppError> {
    info!("Fetching training session by ID");
    let row = sqlx::query_as::<_, DbTrain>(&format!("{} WHERE id = ?", TRAIN_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(Train::from)
        .ok_or_else(|| not_found("Training session", id))
}

#[instrument(skip(pool))]
pub async fn update_train(
    pool: &Pool<Sqlite>,
    id: i64,
    kind: &str,
    room: &str,
    datetime: NaiveDateTime,
    trainer_id: i64,
    team_id: i64,
) -> Result<(), AppError> {
    info!("Updating training session");
    let res = sqlx::query(
        "UPDATE train
         SET type = ?, room = ?, datetime = ?, id_trainer = ?, id_team = ?
         WHERE id = ?",
    )
    .bind(kind)
    .bind(room)
    .bind(datetime)
    .bind(trainer_id)
    .bind(team_id)
    .bind(id)
    .execute(pool)
    .await?;

    expect_affected(res, "Training session", id)
}

#[instrument(skip(pool))]
pub async fn delete_train(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting training session");
    let res = sqlx::query("DELETE FROM train WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Training session", id)
}
