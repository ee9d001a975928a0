use serde::Serialize;

/// Many-to-many link between a team and one of its trainers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamTrainer {
    pub id: i64,
    pub team_id: i64,
    pub trainer_id: i64,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbTeamTrainer {
    pub id: Option<i64>,
    pub team_id: Option<i64>,
    pub trainer_id: Option<i64>,
}

impl From<DbTeamTrainer> for TeamTrainer {
    fn from(link: DbTeamTrainer) -> Self {
        Self {
            id: link.id.unwrap_or_default(),
            team_id: link.team_id.unwrap_or_default(),
            trainer_id: link.trainer_id.unwrap_or_default(),
        }
    }
}
