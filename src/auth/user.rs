use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Trainer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Trainer => "trainer",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "student" => Ok(Role::Student),
            "trainer" => Ok(Role::Trainer),
            _ => Err(AppError::Internal(format!("Unknown role: {}", s))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public view of a user. The password hash never leaves the `auth` module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub student_id: Option<i64>,
    pub trainer_id: Option<i64>,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbUser {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub role: Option<String>,
    pub student_id: Option<i64>,
    pub trainer_id: Option<i64>,
}

#[derive(sqlx::FromRow, Clone)]
pub struct DbUserCredentials {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub role: Option<String>,
    pub student_id: Option<i64>,
    pub trainer_id: Option<i64>,
    pub password_hash: Option<String>,
}

impl From<DbUserCredentials> for DbUser {
    fn from(credentials: DbUserCredentials) -> Self {
        Self {
            id: credentials.id,
            username: credentials.username,
            role: credentials.role,
            student_id: credentials.student_id,
            trainer_id: credentials.trainer_id,
        }
    }
}

impl TryFrom<DbUser> for User {
    type Error = AppError;

    fn try_from(user: DbUser) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.id.unwrap_or_default(),
            username: user.username.unwrap_or_default(),
            role: Role::parse(&user.role.unwrap_or_default())?,
            student_id: user.student_id,
            trainer_id: user.trainer_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_its_column_value() {
        for role in [Role::Student, Role::Trainer] {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_in_row_is_an_error() {
        let row = DbUser {
            id: Some(1),
            username: Some("ghost".into()),
            role: Some("admin".into()),
            student_id: None,
            trainer_id: None,
        };

        assert!(matches!(User::try_from(row), Err(AppError::Internal(_))));
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Trainer).unwrap(), "\"trainer\"");
        let parsed: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(parsed, Role::Student);
    }
}
