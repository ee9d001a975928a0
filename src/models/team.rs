use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub league: String,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbTeam {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub league: Option<String>,
}

impl From<DbTeam> for Team {
    fn from(team: DbTeam) -> Self {
        Self {
            id: team.id.unwrap_or_default(),
            name: team.name.unwrap_or_default(),
            league: team.league.unwrap_or_default(),
        }
    }
}
