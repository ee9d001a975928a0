use chrono::{DateTime, Utc};
use rocket::State;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use validator::Validate;

use super::MessageResponse;
use crate::db;
use crate::error::AppError;
use crate::models::Tournament;
use crate::validation::{JsonBody, JsonValidateExt, parse_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TournamentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Room must not be empty"))]
    pub room: String,
    pub datetime: DateTime<Utc>,
    #[validate(range(min = 1, message = "team_id must be a positive id"))]
    pub team_id: i64,
}

impl From<Tournament> for TournamentDto {
    fn from(tournament: Tournament) -> Self {
        Self {
            id: Some(tournament.id),
            name: tournament.name,
            room: tournament.room,
            datetime: tournament.datetime,
            team_id: tournament.team_id,
        }
    }
}

#[post("/tournament/create", data = "<data>")]
pub async fn api_create_tournament(
    data: JsonBody<'_, TournamentDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TournamentDto>, AppError> {
    let tournament = data.validated()?;
    let id = db::create_tournament(
        db,
        &tournament.name,
        &tournament.room,
        tournament.datetime.naive_utc(),
        tournament.team_id,
    )
    .await?;

    Ok(Json(TournamentDto {
        id: Some(id),
        ..tournament
    }))
}

#[post("/tournament/update/<id>", data = "<data>")]
pub async fn api_update_tournament(
    id: &str,
    data: JsonBody<'_, TournamentDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TournamentDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let tournament = data.validated()?;
    db::update_tournament(
        db,
        id,
        &tournament.name,
        &tournament.room,
        tournament.datetime.naive_utc(),
        tournament.team_id,
    )
    .await?;

    Ok(Json(TournamentDto {
        id: Some(id),
        ..tournament
    }))
}

#[post("/tournament/delete/<id>")]
pub async fn api_delete_tournament(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(id, "ID")?;
    db::delete_tournament(db, id).await?;

    Ok(Json(MessageResponse::new("Tournament deleted")))
}

#[get("/tournament")]
pub async fn api_get_tournaments(
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<TournamentDto>>, AppError> {
    let tournaments = db::get_all_tournaments(db).await?;

    Ok(Json(
        tournaments.into_iter().map(TournamentDto::from).collect(),
    ))
}

#[get("/tournament/<id>")]
pub async fn api_get_tournament(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TournamentDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let tournament = db::get_tournament(db, id).await?;

    Ok(Json(TournamentDto::from(tournament)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        api_create_tournament,
        api_update_tournament,
        api_delete_tournament,
        api_get_tournaments,
        api_get_tournament
    ]
}
