//! Read-only reports over one student's team, its trainers, and either
//! their training sessions or the team's tournaments.
//!
//! Every query walks the same chain:
//! `student -> team -> team_trainer -> trainer`. A student without a team
//! trainer therefore produces no rows, which callers see as an empty list
//! or, for attendance, a zero-valued report.

use chrono::{NaiveDateTime, Utc};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info, instrument};

use crate::error::AppError;
use crate::models::{
    AttendanceReport, CompetitionReport, DbAttendanceReport, DbCompetitionReport,
    DbTrainingScheduleReport, TrainingScheduleReport,
};

// Sessions of the team/trainer pair that started before `?` count; each one
// is attended unless an absence row exists for this student.
const ATTENDANCE_QUERY: &str = "
    SELECT
        tr.name AS trainer_name,
        st.name AS student_name,
        tm.name AS team_name,
        COUNT(DISTINCT trn.id) - COUNT(DISTINCT ab.train_id) AS attended_trainings,
        COUNT(DISTINCT ab.train_id) AS missed_trainings
    FROM student st
    JOIN team tm ON st.team_id = tm.id
    JOIN team_trainer tt ON tt.id_team = tm.id
    JOIN trainer tr ON tr.id = tt.id_trainer
    LEFT JOIN train trn
        ON trn.id_team = tm.id AND trn.id_trainer = tr.id AND trn.datetime < ?
    LEFT JOIN absence ab
        ON ab.train_id = trn.id AND ab.student_id = st.id
    WHERE st.id = ?
    GROUP BY tr.id, tr.name, st.name, tm.name
    ORDER BY tr.name, tr.id";

const COMPETITION_QUERY: &str = "
    SELECT
        tr.name AS trainer_name,
        st.name AS student_name,
        tm.name AS team_name,
        t.name AS competition_name,
        t.datetime AS competition_date,
        t.room AS competition_place
    FROM student st
    JOIN team tm ON st.team_id = tm.id
    JOIN team_trainer tt ON tt.id_team = tm.id
    JOIN trainer tr ON tr.id = tt.id_trainer
    JOIN tournament t ON t.id_team = tm.id
    WHERE st.id = ?
    ORDER BY t.datetime, t.id, tr.name";

const SCHEDULE_QUERY: &str = "
    SELECT
        tr.name AS trainer_name,
        st.name AS student_name,
        tm.name AS team_name,
        trn.room AS room,
        trn.datetime AS datetime
    FROM student st
    JOIN team tm ON st.team_id = tm.id
    JOIN team_trainer tt ON tt.id_team = tm.id
    JOIN trainer tr ON tr.id = tt.id_trainer
    JOIN train trn ON trn.id_trainer = tr.id AND trn.id_team = tm.id
    WHERE st.id = ?
    ORDER BY trn.datetime, trn.id";

/// One row per trainer of the student's team, as of `now`.
#[instrument(skip(pool))]
pub async fn get_attendance_by_trainer(
    pool: &Pool<Sqlite>,
    student_id: i64,
    now: NaiveDateTime,
) -> Result<Vec<AttendanceReport>, AppError> {
    info!("Fetching attendance report for student");
    let rows = sqlx::query_as::<_, DbAttendanceReport>(ATTENDANCE_QUERY)
        .bind(now)
        .bind(student_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(AttendanceReport::from).collect())
}

/// Attendance under the alphabetically first trainer of the student's team,
/// or the zero-valued report when the student has no team trainer.
#[instrument(skip(pool))]
pub async fn get_attendance_report(
    pool: &Pool<Sqlite>,
    student_id: i64,
) -> Result<AttendanceReport, AppError> {
    let now = Utc::now().naive_utc();
    let rows = get_attendance_by_trainer(pool, student_id, now).await?;
    if rows.len() > 1 {
        debug!(
            trainer_rows = rows.len(),
            kept_trainer = %rows[0].trainer_name,
            "Student has several team trainers, reporting the first"
        );
    }

    Ok(rows.into_iter().next().unwrap_or_default())
}

#[instrument(skip(pool))]
pub async fn get_competition_report(
    pool: &Pool<Sqlite>,
    student_id: i64,
) -> Result<Vec<CompetitionReport>, AppError> {
    info!("Fetching competition report for student");
    let rows = sqlx::query_as::<_, DbCompetitionReport>(COMPETITION_QUERY)
        .bind(student_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(CompetitionReport::from).collect())
}

#[instrument(skip(pool))]
pub async fn get_training_schedule_report(
    pool: &Pool<Sqlite>,
    student_id: i64,
) -> Result<Vec<TrainingScheduleReport>, AppError> {
    info!("Fetching training schedule report for student");
    let rows = sqlx::query_as::<_, DbTrainingScheduleReport>(SCHEDULE_QUERY)
        .bind(student_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(TrainingScheduleReport::from).collect())
}
