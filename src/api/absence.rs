use rocket::State;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use validator::Validate;

use super::MessageResponse;
use crate::db;
use crate::error::AppError;
use crate::models::Absence;
use crate::validation::{JsonBody, JsonValidateExt, parse_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AbsenceDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(range(min = 1, message = "train_id must be a positive id"))]
    pub train_id: i64,
    #[validate(range(min = 1, message = "student_id must be a positive id"))]
    pub student_id: i64,
}

impl From<Absence> for AbsenceDto {
    fn from(absence: Absence) -> Self {
        Self {
            id: Some(absence.id),
            train_id: absence.train_id,
            student_id: absence.student_id,
        }
    }
}

#[post("/absence/create", data = "<data>")]
pub async fn api_create_absence(
    data: JsonBody<'_, AbsenceDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<AbsenceDto>, AppError> {
    let absence = data.validated()?;
    let id = db::create_absence(db, absence.train_id, absence.student_id).await?;

    Ok(Json(AbsenceDto {
        id: Some(id),
        ..absence
    }))
}

#[post("/absence/delete/<id>")]
pub async fn api_delete_absence(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(id, "ID")?;
    db::delete_absence(db, id).await?;

    Ok(Json(MessageResponse::new("Absence deleted")))
}

#[get("/absence?<train_id>")]
pub async fn api_get_absences(
    train_id: Option<&str>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<AbsenceDto>>, AppError> {
    let train_id = train_id.map(|raw| parse_id(raw, "train_id")).transpose()?;
    let absences = db::get_absences(db, train_id).await?;

    Ok(Json(absences.into_iter().map(AbsenceDto::from).collect()))
}

#[get("/absence/<id>")]
pub async fn api_get_absence(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<AbsenceDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let absence = db::get_absence(db, id).await?;

    Ok(Json(AbsenceDto::from(absence)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        api_create_absence,
        api_delete_absence,
        api_get_absences,
        api_get_absence
    ]
}
