#[macro_use]
extern crate rocket;

mod api;
mod auth;
mod config;
mod cors;
mod db;
mod error;
mod models;
mod telemetry;
#[cfg(test)]
mod test;
mod validation;

use config::{AppConfig, load_environment};
use cors::Cors;
use error::AppError;
use rocket::{Build, Rocket};
use sqlx::{Pool, Sqlite};
use telemetry::{TelemetryFairing, init_tracing};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Anyhow(anyhow::Error),
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("{0}")]
    Rocket(Box<rocket::Error>),
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Error::Anyhow(value)
    }
}

impl From<rocket::Error> for Error {
    fn from(value: rocket::Error) -> Self {
        Error::Rocket(Box::new(value))
    }
}

#[rocket::main]
async fn main() -> Result<(), Error> {
    load_environment()?;
    let config = AppConfig::from_env()?;
    let _otel_guard = init_tracing(&config)?;

    let pool = db::connect(&config.database_url).await?;

    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations completed successfully");

    let _rocket = init_rocket(pool).launch().await?;

    Ok(())
}

pub fn init_rocket(pool: Pool<Sqlite>) -> Rocket<Build> {
    info!("Starting stud-trainer");

    rocket::build()
        .manage(pool)
        .mount("/api/v1", api::routes())
        .mount("/", cors::routes())
        .register("/", catchers![api::default_catcher])
        .attach(TelemetryFairing)
        .attach(Cors)
}
