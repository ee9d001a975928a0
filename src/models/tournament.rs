use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use super::utc_from_naive;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub room: String,
    pub datetime: DateTime<Utc>,
    pub team_id: i64,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbTournament {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub room: Option<String>,
    pub datetime: Option<NaiveDateTime>,
    pub team_id: Option<i64>,
}

impl From<DbTournament> for Tournament {
    fn from(tournament: DbTournament) -> Self {
        Self {
            id: tournament.id.unwrap_or_default(),
            name: tournament.name.unwrap_or_default(),
            room: tournament.room.unwrap_or_default(),
            datetime: utc_from_naive(tournament.datetime),
            team_id: tournament.team_id.unwrap_or_default(),
        }
    }
}
