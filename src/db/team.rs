use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::{expect_affected, not_found};
use crate::error::AppError;
use crate::models::{DbTeam, Team};

#[instrument(skip(pool))]
pub async fn create_team(pool: &Pool<Sqlite>, name: &str, league: &str) -> Result<i64, AppError> {
    info!("Creating team");
    let res = sqlx::query("INSERT INTO team (name, league) VALUES (?, ?)")
        .bind(name)
        .bind(league)
        .execute(pool)
        .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_teams(pool: &Pool<Sqlite>) -> Result<Vec<Team>, AppError> {
    info!("Getting all teams");
    let rows = sqlx::query_as::<_, DbTeam>("SELECT id, name, league FROM team ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Team::from).collect())
}

#[instrument(skip(pool))]
pub async fn get_team(pool: &Pool<Sqlite>, id: i64) -> Result<Team, AppError> {
    info!("Fetching team by ID");
    let row = sqlx::query_as::<_, DbTeam>("SELECT id, name, league FROM team WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(Team::from).ok_or_else(|| not_found("Team", id))
}

#[instrument(skip(pool))]
pub async fn update_team(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    league: &str,
) -> Result<(), AppError> {
    info!("Updating team");
    let res = sqlx::query("UPDATE team SET name = ?, league = ? WHERE id = ?")
        .bind(name)
        .bind(league)
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Team", id)
}

/// Students, team-trainer links, trains and tournaments of the team go with
/// it through the schema's ON DELETE CASCADE.
#[instrument(skip(pool))]
pub async fn delete_team(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting team");
    let res = sqlx::query("DELETE FROM team WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Team", id)
}
