use chrono::NaiveDateTime;
use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::{expect_affected, not_found};
use crate::error::AppError;
use crate::models::{DbTournament, Tournament};

const TOURNAMENT_COLUMNS: &str =
    "SELECT id, name, room, datetime, id_team AS team_id FROM tournament";

#[instrument(skip(pool))]
pub async fn create_tournament(
    pool: &Pool<Sqlite>,
    name: &str,
    room: &str,
    datetime: NaiveDateTime,
    team_id: i64,
) -> Result<i64, AppError> {
    info!("Creating tournament");
    let res = sqlx::query(
        "INSERT INTO tournament (name, room, datetime, id_team) VALUES (?, ?, ?, ?)",
    )
    .bind(name)
    .bind(room)
    .bind(datetime)
    .bind(team_id)
    .execute(pool)
    .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_tournaments(pool: &Pool<Sqlite>) -> Result<Vec<Tournament>, AppError> {
    info!("Getting all tournaments");
    let rows = sqlx::query_as::<_, DbTournament>(&format!("{} ORDER BY id", TOURNAMENT_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Tournament::from).collect())
}

#[instrument(skip(pool))]
pub async fn get_tournament(pool: &Pool<Sqlite>, id: i64) -> Result<Tournament, AppError> {
    info!("Fetching tournament by ID");
    let row = sqlx::query_as::<_, DbTournament>(&format!("{} WHERE id = ?", TOURNAMENT_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(Tournament::from)
        .ok_or_else(|| not_found("Tournament", id))
}

#[instrument(skip(pool))]
pub async fn update_tournament(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    room: &str,
    datetime: NaiveDateTime,
    team_id: i64,
) -> Result<(), AppError> {
    info!("Updating tournament");
    let res = sqlx::query(
        "UPDATE tournament SET name = ?, room = ?, datetime = ?, id_team = ? WHERE id = ?",
    )
    .bind(name)
    .bind(room)
    .bind(datetime)
    .bind(team_id)
    .bind(id)
    .execute(pool)
    .await?;

    expect_affected(res, "Tournament", id)
}

#[instrument(skip(pool))]
pub async fn delete_tournament(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting tournament");
    let res = sqlx::query("DELETE FROM tournament WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Tournament", id)
}
