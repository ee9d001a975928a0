use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::utc_from_naive;

/// Past-session attendance of one student under one trainer.
///
/// The zero value (empty names, zero counts) stands for "no team/trainer
/// chain found for this student".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub trainer_name: String,
    pub student_name: String,
    pub team_name: String,
    pub attended_trainings: i64,
    pub missed_trainings: i64,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbAttendanceReport {
    pub trainer_name: Option<String>,
    pub student_name: Option<String>,
    pub team_name: Option<String>,
    pub attended_trainings: Option<i64>,
    pub missed_trainings: Option<i64>,
}

impl From<DbAttendanceReport> for AttendanceReport {
    fn from(db: DbAttendanceReport) -> Self {
        Self {
            trainer_name: db.trainer_name.unwrap_or_default(),
            student_name: db.student_name.unwrap_or_default(),
            team_name: db.team_name.unwrap_or_default(),
            attended_trainings: db.attended_trainings.unwrap_or_default(),
            missed_trainings: db.missed_trainings.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionReport {
    pub trainer_name: String,
    pub student_name: String,
    pub team_name: String,
    pub competition_name: String,
    pub competition_date: DateTime<Utc>,
    pub competition_place: String,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbCompetitionReport {
    pub trainer_name: Option<String>,
    pub student_name: Option<String>,
    pub team_name: Option<String>,
    pub competition_name: Option<String>,
    pub competition_date: Option<NaiveDateTime>,
    pub competition_place: Option<String>,
}

impl From<DbCompetitionReport> for CompetitionReport {
    fn from(db: DbCompetitionReport) -> Self {
        Self {
            trainer_name: db.trainer_name.unwrap_or_default(),
            student_name: db.student_name.unwrap_or_default(),
            team_name: db.team_name.unwrap_or_default(),
            competition_name: db.competition_name.unwrap_or_default(),
            competition_date: utc_from_naive(db.competition_date),
            competition_place: db.competition_place.unwrap_or_default(),
        }
    }
}

/// One scheduled session. Date and start time both come from the
/// session's single timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingScheduleReport {
    pub trainer_name: String,
    pub student_name: String,
    pub team_name: String,
    pub training_date: NaiveDate,
    pub room: String,
    pub start_time: NaiveTime,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbTrainingScheduleReport {
    pub trainer_name: Option<String>,
    pub student_name: Option<String>,
    pub team_name: Option<String>,
    pub room: Option<String>,
    pub datetime: Option<NaiveDateTime>,
}

impl From<DbTrainingScheduleReport> for TrainingScheduleReport {
    fn from(db: DbTrainingScheduleReport) -> Self {
        let datetime = db.datetime.unwrap_or_default();
        Self {
            trainer_name: db.trainer_name.unwrap_or_default(),
            student_name: db.student_name.unwrap_or_default(),
            team_name: db.team_name.unwrap_or_default(),
            training_date: datetime.date(),
            room: db.room.unwrap_or_default(),
            start_time: datetime.time(),
        }
    }
}
