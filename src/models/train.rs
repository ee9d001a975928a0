use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use super::utc_from_naive;

/// A scheduled training session for one team with one trainer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Train {
    pub id: i64,
    pub kind: String,
    pub room: String,
    pub datetime: DateTime<Utc>,
    pub trainer_id: i64,
    pub team_id: i64,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbTrain {
    pub id: Option<i64>,
    pub kind: Option<String>,
    pub room: Option<String>,
    pub datetime: Option<NaiveDateTime>,
    pub trainer_id: Option<i64>,
    pub team_id: Option<i64>,
}

impl From<DbTrain> for Train {
    fn from(train: DbTrain) -> Self {
        Self {
            id: train.id.unwrap_or_default(),
            kind: train.kind.unwrap_or_default(),
            room: train.room.unwrap_or_default(),
            datetime: utc_from_naive(train.datetime),
            trainer_id: train.trainer_id.unwrap_or_default(),
            team_id: train.team_id.unwrap_or_default(),
        }
    }
}
