use rocket::State;
use rocket::serde::json::Json;
use sqlx::{Pool, Sqlite};

use crate::db;
use crate::error::AppError;
use crate::models::{AttendanceReport, CompetitionReport, TrainingScheduleReport};
use crate::validation::require_id;

#[get("/report/attendance?<student_id>")]
pub async fn api_get_attendance_report(
    student_id: Option<&str>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<AttendanceReport>, AppError> {
    let student_id = require_id(student_id, "student_id")?;
    let report = db::get_attendance_report(db, student_id).await?;

    Ok(Json(report))
}

#[get("/report/competition?<student_id>")]
pub async fn api_get_competition_report(
    student_id: Option<&str>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<CompetitionReport>>, AppError> {
    let student_id = require_id(student_id, "student_id")?;
    let report = db::get_competition_report(db, student_id).await?;

    Ok(Json(report))
}

#[get("/report/schedule?<student_id>")]
pub async fn api_get_training_schedule_report(
    student_id: Option<&str>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<TrainingScheduleReport>>, AppError> {
    let student_id = require_id(student_id, "student_id")?;
    let report = db::get_training_schedule_report(db, student_id).await?;

    Ok(Json(report))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        api_get_attendance_report,
        api_get_competition_report,
        api_get_training_schedule_report
    ]
}
