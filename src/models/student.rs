use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub height: i64,
    pub weight: i64,
    pub team_id: i64,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbStudent {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub team_id: Option<i64>,
}

impl From<DbStudent> for Student {
    fn from(student: DbStudent) -> Self {
        Self {
            id: student.id.unwrap_or_default(),
            name: student.name.unwrap_or_default(),
            age: student.age.unwrap_or_default(),
            height: student.height.unwrap_or_default(),
            weight: student.weight.unwrap_or_default(),
            team_id: student.team_id.unwrap_or_default(),
        }
    }
}
