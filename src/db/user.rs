use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::not_found;
use crate::auth::{DbUser, DbUserCredentials, User};
use crate::error::{AppError, unique_violation_as_conflict};

const USER_COLUMNS: &str = "SELECT id, username, role, student_id, trainer_id FROM users";

/// Inserts an already hashed password. Hashing lives in `auth`.
#[instrument(skip(pool, password_hash))]
pub async fn create_user(
    pool: &Pool<Sqlite>,
    username: &str,
    password_hash: &str,
    role: &str,
    student_id: Option<i64>,
    trainer_id: Option<i64>,
) -> Result<i64, AppError> {
    info!("Creating new user");
    let res = sqlx::query(
        "INSERT INTO users (username, password_hash, role, student_id, trainer_id)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(username)
    .bind(password_hash)
    .bind(role)
    .bind(student_id)
    .bind(trainer_id)
    .execute(pool)
    .await
    .map_err(|e| unique_violation_as_conflict(e, &format!("Username '{}' already exists", username)))?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_user(pool: &Pool<Sqlite>, id: i64) -> Result<User, AppError> {
    info!("Fetching user by ID");
    let row = sqlx::query_as::<_, DbUser>(&format!("{} WHERE id = ?", USER_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(user) => User::try_from(user),
        _ => Err(not_found("User", id)),
    }
}

#[instrument(skip(pool))]
pub async fn find_user_by_username(
    pool: &Pool<Sqlite>,
    username: &str,
) -> Result<Option<User>, AppError> {
    info!("Finding user by username");
    let row = sqlx::query_as::<_, DbUser>(&format!("{} WHERE username = ?", USER_COLUMNS))
        .bind(username)
        .fetch_optional(pool)
        .await?;

    row.map(User::try_from).transpose()
}

#[instrument(skip(pool))]
pub async fn get_user_by_username(pool: &Pool<Sqlite>, username: &str) -> Result<User, AppError> {
    find_user_by_username(pool, username).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "User with username {} not found in database",
            username
        ))
    })
}

/// The stored hash travels with the user only on this path, for password
/// verification.
#[instrument(skip(pool))]
pub async fn get_user_credentials(
    pool: &Pool<Sqlite>,
    username: &str,
) -> Result<Option<(User, String)>, AppError> {
    info!("Fetching user credentials");
    let row = sqlx::query_as::<_, DbUserCredentials>(
        "SELECT id, username, role, student_id, trainer_id, password_hash
         FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(credentials) => {
            let password_hash = credentials.password_hash.clone().unwrap_or_default();
            let user = User::try_from(DbUser::from(credentials))?;
            Ok(Some((user, password_hash)))
        }
        None => Ok(None),
    }
}
