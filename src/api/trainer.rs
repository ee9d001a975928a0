use rocket::State;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use validator::Validate;

use super::MessageResponse;
use crate::db;
use crate::error::AppError;
use crate::models::Trainer;
use crate::validation::{JsonBody, JsonValidateExt, parse_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TrainerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,
}

impl From<Trainer> for TrainerDto {
    fn from(trainer: Trainer) -> Self {
        Self {
            id: Some(trainer.id),
            name: trainer.name,
            age: trainer.age,
        }
    }
}

#[post("/trainer/create", data = "<data>")]
pub async fn api_create_trainer(
    data: JsonBody<'_, TrainerDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TrainerDto>, AppError> {
    let trainer = data.validated()?;
    let id = db::create_trainer(db, &trainer.name, trainer.age).await?;

    Ok(Json(TrainerDto {
        id: Some(id),
        ..trainer
    }))
}

#[post("/trainer/update/<id>", data = "<data>")]
pub async fn api_update_trainer(
    id: &str,
    data: JsonBody<'_, TrainerDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TrainerDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let trainer = data.validated()?;
    db::update_trainer(db, id, &trainer.name, trainer.age).await?;

    Ok(Json(TrainerDto {
        id: Some(id),
        ..trainer
    }))
}

#[post("/trainer/delete/<id>")]
pub async fn api_delete_trainer(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(id, "ID")?;
    db::delete_trainer(db, id).await?;

    Ok(Json(MessageResponse::new("Trainer deleted")))
}

#[get("/trainer")]
pub async fn api_get_trainers(
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<TrainerDto>>, AppError> {
    let trainers = db::get_all_trainers(db).await?;

    Ok(Json(trainers.into_iter().map(TrainerDto::from).collect()))
}

#[get("/trainer/<id>")]
pub async fn api_get_trainer(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TrainerDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let trainer = db::get_trainer(db, id).await?;

    Ok(Json(TrainerDto::from(trainer)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        api_create_trainer,
        api_update_trainer,
        api_delete_trainer,
        api_get_trainers,
        api_get_trainer
    ]
}
