use rocket::State;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use validator::Validate;

use super::MessageResponse;
use crate::db;
use crate::error::AppError;
use crate::models::Team;
use crate::validation::{JsonBody, JsonValidateExt, parse_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "League must be 1-255 characters"))]
    pub league: String,
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        Self {
            id: Some(team.id),
            name: team.name,
            league: team.league,
        }
    }
}

#[post("/team/create", data = "<data>")]
pub async fn api_create_team(
    data: JsonBody<'_, TeamDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TeamDto>, AppError> {
    let team = data.validated()?;
    let id = db::create_team(db, &team.name, &team.league).await?;

    Ok(Json(TeamDto { id: Some(id), ..team }))
}

#[post("/team/update/<id>", data = "<data>")]
pub async fn api_update_team(
    id: &str,
    data: JsonBody<'_, TeamDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TeamDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let team = data.validated()?;
    db::update_team(db, id, &team.name, &team.league).await?;

    Ok(Json(TeamDto { id: Some(id), ..team }))
}

#[post("/team/delete/<id>")]
pub async fn api_delete_team(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(id, "ID")?;
    db::delete_team(db, id).await?;

    Ok(Json(MessageResponse::new("Team deleted")))
}

#[get("/team")]
pub async fn api_get_teams(db: &State<Pool<Sqlite>>) -> Result<Json<Vec<TeamDto>>, AppError> {
    let teams = db::get_all_teams(db).await?;

    Ok(Json(teams.into_iter().map(TeamDto::from).collect()))
}

#[get("/team/<id>")]
pub async fn api_get_team(id: &str, db: &State<Pool<Sqlite>>) -> Result<Json<TeamDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let team = db::get_team(db, id).await?;

    Ok(Json(TeamDto::from(team)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        api_create_team,
        api_update_team,
        api_delete_team,
        api_get_teams,
        api_get_team
    ]
}
