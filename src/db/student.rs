use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::{expect_affected, not_found};
use crate::error::AppError;
use crate::models::{DbStudent, Student};

const STUDENT_COLUMNS: &str = "SELECT id, name, age, height, weight, team_id FROM student";

#[instrument(skip(pool))]
pub async fn create_student(
    pool: &Pool<Sqlite>,
    name: &str,
    age: i64,
    height: i64,
    weight: i64,
    team_id: i64,
) -> Result<i64, AppError> {
    info!("Creating new student");
    let res = sqlx::query(
        "INSERT INTO student (name, age, height, weight, team_id)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(name)
    .bind(age)
    .bind(height)
    .bind(weight)
    .bind(team_id)
    .execute(pool)
    .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_students(pool: &Pool<Sqlite>) -> Result<Vec<Student>, AppError> {
    info!("Getting all students");
    let rows = sqlx::query_as::<_, DbStudent>(&format!("{} ORDER BY id", STUDENT_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Student::from).collect())
}

#[instrument(skip(pool))]
pub async fn get_student(pool: &Pool<Sqlite>, id: i64) -> Result<Student, AppError> {
    info!("Fetching student by ID");
    let row = sqlx::query_as::<_, DbStudent>(&format!("{} WHERE id = ?", STUDENT_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(Student::from)
        .ok_or_else(|| not_found("Student", id))
}

#[instrument(skip(pool))]
pub async fn update_student(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    age: i64,
    height: i64,
    weight: i64,
    team_id: i64,
) -> Result<(), AppError> {
    info!("Updating student");
    let res = sqlx::query(
        "UPDATE student
         SET name = ?, age = ?, height = ?, weight = ?, team_id = ?
         WHERE id = ?",
    )
    .bind(name)
    .bind(age)
    .bind(height)
    .bind(weight)
    .bind(team_id)
    .bind(id)
    .execute(pool)
    .await?;

    expect_affected(res, "Student", id)
}

#[instrument(skip(pool))]
pub async fn delete_student(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting student");
    let res = sqlx::query("DELETE FROM student WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    expect_affected(res, "Student", id)
}
