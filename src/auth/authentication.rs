use sqlx::{Pool, Sqlite};
use tracing::{info, instrument, warn};

use super::{Role, User};
use crate::db::{create_user, find_user_by_username, get_user, get_user_credentials};
use crate::error::AppError;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Hashes the password with bcrypt and stores a new user.
#[instrument(skip(pool, password), fields(username = %username, role = %role))]
pub async fn register_user(
    pool: &Pool<Sqlite>,
    username: &str,
    password: &str,
    role: Role,
    student_id: Option<i64>,
    trainer_id: Option<i64>,
) -> Result<User, AppError> {
    info!("Registering user");

    if find_user_by_username(pool, username).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Username '{}' already exists",
            username
        )));
    }

    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let id = create_user(
        pool,
        username,
        &password_hash,
        role.as_str(),
        student_id,
        trainer_id,
    )
    .await?;

    get_user(pool, id).await
}

/// Checks a password against the stored bcrypt hash. Unknown users, wrong
/// passwords and unreadable hashes all produce the same error.
#[instrument(skip(pool, password), fields(username = %username))]
pub async fn authorize_user(
    pool: &Pool<Sqlite>,
    username: &str,
    password: &str,
) -> Result<User, AppError> {
    info!("Authorizing user");

    let Some((user, password_hash)) = get_user_credentials(pool, username).await? else {
        warn!("Login attempt for unknown user");
        return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
    };

    match bcrypt::verify(password, &password_hash) {
        Ok(true) => Ok(user),
        Ok(false) => {
            warn!("Password mismatch");
            Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()))
        }
        Err(err) => {
            warn!(error = %err, "Stored password hash could not be verified");
            Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()))
        }
    }
}
