use chrono::{DateTime, Utc};
use rocket::State;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use validator::Validate;

use super::MessageResponse;
use crate::db;
use crate::error::AppError;
use crate::models::Train;
use crate::validation::{JsonBody, JsonValidateExt, parse_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TrainDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type must not be empty"))]
    pub kind: String,
    #[validate(length(min = 1, message = "Room must not be empty"))]
    pub room: String,
    pub datetime: DateTime<Utc>,
    #[validate(range(min = 1, message = "trainer_id must be a positive id"))]
    pub trainer_id: i64,
    #[validate(range(min = 1, message = "team_id must be a positive id"))]
    pub team_id: i64,
}

impl From<Train> for TrainDto {
    fn from(train: Train) -> Self {
        Self {
            id: Some(train.id),
            kind: train.kind,
            room: train.room,
            datetime: train.datetime,
            trainer_id: train.trainer_id,
            team_id: train.team_id,
        }
    }
}

#[post("/train/create", data = "<data>")]
pub async fn api_create_train(
    data: JsonBody<'_, TrainDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TrainDto>, AppError> {
    let train = data.validated()?;
    let id = db::create_train(
        db,
        &train.kind,
        &train.room,
        train.datetime.naive_utc(),
        train.trainer_id,
        train.team_id,
    )
    .await?;

    Ok(Json(TrainDto {
        id: Some(id),
        ..train
    }))
}

#[post("/train/update/<id>", data = "<data>")]
pub async fn api_update_train(
    id: &str,
    data: JsonBody<'_, TrainDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TrainDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let train = data.validated()?;
    db::update_train(
        db,
        id,
        &train.kind,
        &train.room,
        train.datetime.naive_utc(),
        train.trainer_id,
        train.team_id,
    )
    .await?;

    Ok(Json(TrainDto {
        id: Some(id),
        ..train
    }))
}

#[post("/train/delete/<id>")]
pub async fn api_delete_train(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(id, "ID")?;
    db::delete_train(db, id).await?;

    Ok(Json(MessageResponse::new("Training session deleted")))
}

#[get("/train")]
pub async fn api_get_trains(db: &State<Pool<Sqlite>>) -> Result<Json<Vec<TrainDto>>, AppError> {
    let trains = db::get_all_trains(db).await?;

    Ok(Json(trains.into_iter().map(TrainDto::from).collect()))
}

#[get("/train/<id>")]
pub async fn api_get_train(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<TrainDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let train = db::get_train(db, id).await?;

    Ok(Json(TrainDto::from(train)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        api_create_train,
        api_update_train,
        api_delete_train,
        api_get_trains,
        api_get_train
    ]
}
