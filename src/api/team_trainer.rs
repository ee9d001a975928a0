use rocket::State;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use validator::Validate;

use super::MessageResponse;
use crate::db;
use crate::error::AppError;
use crate::models::TeamTrainer;
use crate::validation::{JsonBody, JsonValidateExt, parse_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamTrainerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(range(min = 1, message = "team_id must be a positive id"))]
    pub team_id: i64,
    #[validate(range(min = 1, message = "trainer_id must be a positive id"))]
    pub trainer_id: i64,
}

impl From<TeamTrainer> for TeamTrainerDto {
    fn from(link: TeamTrainer) -> Self {
        Self {
            id: Some(link.id),
            team_id: link.team_id,
            trainer_id: link.trainer_id,
        }
    }
}

#[post("/team-trainer/create", data = "<data>")]
pub async fn api_create_team_trainer(
    data: JsonBody<'_, TeamTrainerDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TeamTrainerDto>, AppError> {
    let link = data.validated()?;
    let id = db::create_team_trainer(db, link.team_id, link.trainer_id).await?;

    Ok(Json(TeamTrainerDto { id: Some(id), ..link }))
}

#[post("/team-trainer/update/<id>", data = "<data>")]
pub async fn api_update_team_trainer(
    id: &str,
    data: JsonBody<'_, TeamTrainerDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TeamTrainerDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let link = data.validated()?;
    db::update_team_trainer(db, id, link.team_id, link.trainer_id).await?;

    Ok(Json(TeamTrainerDto { id: Some(id), ..link }))
}

#[post("/team-trainer/delete/<id>")]
pub async fn api_delete_team_trainer(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(id, "ID")?;
    db::delete_team_trainer(db, id).await?;

    Ok(Json(MessageResponse::new("Team-trainer relationship deleted")))
}

#[get("/team-trainer")]
pub async fn api_get_team_trainers(
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<TeamTrainerDto>>, AppError> {
    let links = db::get_all_team_trainers(db).await?;

    Ok(Json(links.into_iter().map(TeamTrainerDto::from).collect()))
}

#[get("/team-trainer/<id>")]
pub async fn api_get_team_trainer(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TeamTrainerDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let link = db::get_team_trainer(db, id).await?;

    Ok(Json(TeamTrainerDto::from(link)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        api_create_team_trainer,
        api_update_team_trainer,
        api_delete_team_trainer,
        api_get_team_trainers,
        api_get_team_trainer
    ]
}
