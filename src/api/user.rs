use rocket::State;
use rocket::http::{Cookie, CookieJar, SameSite, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use tracing::info;
use validator::Validate;

use super::MessageResponse;
use crate::auth::{Role, User, authorize_user, register_user};
use crate::db;
use crate::error::AppError;
use crate::validation::{JsonBody, JsonValidateExt};

const SESSION_COOKIES: [&str; 3] = ["user_id", "username", "role"];

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub trainer_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<i64>,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            student_id: user.student_id,
            trainer_id: user.trainer_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserData,
}

fn set_session_cookies(cookies: &CookieJar<'_>, user: &User) {
    let values = [
        user.id.to_string(),
        user.username.clone(),
        user.role.to_string(),
    ];

    for (name, value) in SESSION_COOKIES.into_iter().zip(values) {
        cookies.add_private(
            Cookie::build((name, value))
                .same_site(SameSite::Lax)
                .http_only(true)
                .max_age(rocket::time::Duration::hours(1)),
        );
    }
}

#[post("/user/register", data = "<data>")]
pub async fn api_register_user(
    data: JsonBody<'_, RegisterRequest>,
    cookies: &CookieJar<'_>,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<AuthResponse>>, AppError> {
    let request = data.validated()?;

    let user = register_user(
        db,
        &request.username,
        &request.password,
        request.role,
        request.student_id,
        request.trainer_id,
    )
    .await?;

    set_session_cookies(cookies, &user);

    Ok(Custom(
        Status::Created,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: UserData::from(user),
        }),
    ))
}

#[post("/user/login", data = "<data>")]
pub async fn api_login(
    data: JsonBody<'_, LoginRequest>,
    cookies: &CookieJar<'_>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<AuthResponse>, AppError> {
    let request = data.validated()?;
    let user = authorize_user(db, &request.username, &request.password).await?;

    set_session_cookies(cookies, &user);
    info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        message: "Authorization successful".to_string(),
        user: UserData::from(user),
    }))
}

#[post("/user/logout")]
pub async fn api_logout(cookies: &CookieJar<'_>) -> Json<MessageResponse> {
    for name in SESSION_COOKIES {
        cookies.remove_private(Cookie::build(name));
    }

    Json(MessageResponse::new("Logged out"))
}

#[get("/user?<username>")]
pub async fn api_get_user(
    username: Option<&str>,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<UserData>, AppError> {
    let username = username
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::Validation("username parameter is required".to_string()))?;

    let user = db::get_user_by_username(db, username).await?;

    Ok(Json(UserData::from(user)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![api_register_user, api_login, api_logout, api_get_user]
}
