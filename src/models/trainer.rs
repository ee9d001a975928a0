use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbTrainer {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl From<DbTrainer> for Trainer {
    fn from(trainer: DbTrainer) -> Self {
        Self {
            id: trainer.id.unwrap_or_default(),
            name: trainer.name.unwrap_or_default(),
            age: trainer.age.unwrap_or_default(),
        }
    }
}
