//! HTTP handlers, one module per resource. Every route is mounted under
//! `/api/v1`; see [`routes`].

pub mod absence;
pub mod report;
pub mod student;
pub mod team;
pub mod team_trainer;
pub mod tournament;
pub mod train;
pub mod trainer;
pub mod user;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Request, Route};
use serde::{Deserialize, Serialize};

use crate::error::ErrorResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[get("/health")]
pub fn health() -> &'static str {
    "OK"
}

/// Anything Rocket rejects before a handler runs (unknown route, wrong
/// content type, missing body) still answers with the JSON error shape.
#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: status.reason().unwrap_or("Unknown error").to_string(),
    })
}

pub fn routes() -> Vec<Route> {
    let mut routes = routes![health];
    routes.extend(student::routes());
    routes.extend(team::routes());
    routes.extend(trainer::routes());
    routes.extend(team_trainer::routes());
    routes.extend(train::routes());
    routes.extend(tournament::routes());
    routes.extend(absence::routes());
    routes.extend(report::routes());
    routes.extend(user::routes());
    routes
}
