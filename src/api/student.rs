use rocket::State;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use validator::Validate;

use super::MessageResponse;
use crate::db;
use crate::error::AppError;
use crate::models::Student;
use crate::validation::{JsonBody, JsonValidateExt, parse_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StudentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,
    #[validate(range(min = 0, message = "Height must not be negative"))]
    pub height: i64,
    #[validate(range(min = 0, message = "Weight must not be negative"))]
    pub weight: i64,
    #[validate(range(min = 1, message = "team_id must be a positive id"))]
    pub team_id: i64,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: Some(student.id),
            name: student.name,
            age: student.age,
            height: student.height,
            weight: student.weight,
            team_id: student.team_id,
        }
    }
}

#[post("/student/create", data = "<data>")]
pub async fn api_create_student(
    data: JsonBody<'_, StudentDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<StudentDto>, AppError> {
    let student = data.validated()?;
    let id = db::create_student(
        db,
        &student.name,
        student.age,
        student.height,
        student.weight,
        student.team_id,
    )
    .await?;

    Ok(Json(StudentDto {
        id: Some(id),
        ..student
    }))
}

#[post("/student/update/<id>", data = "<data>")]
pub async fn api_update_student(
    id: &str,
    data: JsonBody<'_, StudentDto>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<StudentDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let student = data.validated()?;
    db::update_student(
        db,
        id,
        &student.name,
        student.age,
        student.height,
        student.weight,
        student.team_id,
    )
    .await?;

    Ok(Json(StudentDto {
        id: Some(id),
        ..student
    }))
}

#[post("/student/delete/<id>")]
pub async fn api_delete_student(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(id, "ID")?;
    db::delete_student(db, id).await?;

    Ok(Json(MessageResponse::new("Student deleted")))
}

#[get("/student")]
pub async fn api_get_students(
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<StudentDto>>, AppError> {
    let students = db::get_all_students(db).await?;

    Ok(Json(students.into_iter().map(StudentDto::from).collect()))
}

#[get("/student/<id>")]
pub async fn api_get_student(
    id: &str,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<StudentDto>, AppError> {
    let id = parse_id(id, "ID")?;
    let student = db::get_student(db, id).await?;

    Ok(Json(StudentDto::from(student)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        api_create_student,
        api_update_student,
        api_delete_student,
        api_get_students,
        api_get_student
    ]
}
