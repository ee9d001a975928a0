use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::{expect_affected, not_found};
use crate::error::AppError;
use crate::models::{DbTeamTrainer, TeamTrainer};

const TEAM_TRAINER_COLUMNS: &str =
    "SELECT id, id_team AS team_id, id_trainer AS trainer_id FROM team_trainer";

#[instrument(skip(pool))]
pub async fn create_team_trainer(
    pool: &Pool<Sqlite>,
    team_id: i64,
    trainer_id: i64,
) -> Result<i64, AppError> {
    info!("Creating new team-trainer relationship");
    let res = sqlx::query("INSERT INTO team_trainer (id_team, id_trainer) VALUES (?, ?)")
        .bind(team_id)
        .bind(trainer_id)
        .execute(pool)
        .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_team_trainers(pool: &Pool<Sqlite>) -> Result<Vec<TeamTrainer>, AppError> {
    info!("Getting all team-trainer relationships");
    let rows =
        sqlx::query_as::<_, DbTeamTrainer>(&format!("{} ORDER BY id", TEAM_TRAINER_COLUMNS))
            .fetch_all(pool)
            .await?;

    Ok(rows.into_iter().map(TeamTrainer::from).collect())
}

#[instrument(skip(pool))]
pub async fn get_team_trainer(pool: &Pool<Sqlite>, id: i64) -> Result<TeamTrainer, AppError> {
    info!("Fetching team-trainer relationship by ID");
    let row =
        sqlx::query_as::<_, DbTeamTrainer>(&format!("{} WHERE id = ?", TEAM_TRAINER_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    row.map(TeamTrainer::from)
        .ok_or_else(|| not_found("Team-trainer relationship", id))
}

#[instrument(skip(pool))]
pub async fn update_team_trainer(
    pool: &Pool<Sqlite>,
    id: i64,
    team_id: i64,
    trainer_id: i64,
) -> Result<(), AppError> {
    info!("Updating team-trainer relationship");
    let res = sqlx::query("UPDATE team_trainer SET id_team = ?, id_trainer = ? WHERE id = ?")
        .bind(team_id)
        .bind(trainer_id)
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Team-trainer relationship", id)
}

#[instrument(skip(pool))]
pub async fn delete_team_trainer(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting team-trainer relationship");
    let res = sqlx::query("DELETE FROM team_trainer WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Team-trainer relationship", id)
}
