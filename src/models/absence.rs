use serde::{Deserialize, Serialize};

/// A student missed a training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    pub id: i64,
    pub train_id: i64,
    pub student_id: i64,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbAbsence {
    pub id: Option<i64>,
    pub train_id: Option<i64>,
    pub student_id: Option<i64>,
}

impl From<DbAbsence> for Absence {
    fn from(absence: DbAbsence) -> Self {
        Self {
            id: absence.id.unwrap_or_default(),
            train_id: absence.train_id.unwrap_or_default(),
            student_id: absence.student_id.unwrap_or_default(),
        }
    }
}
