use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

const DEFAULT_DATABASE_URL: &str = "sqlite://stud-trainer.db";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Process settings read once at startup and handed to whoever needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub honeycomb_api_key: Option<String>,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = var_or("DATABASE_URL", DEFAULT_DATABASE_URL);
        if !database_url.starts_with("sqlite:") {
            anyhow::bail!("DATABASE_URL must be a sqlite: URL, got {}", database_url);
        }

        Ok(Self {
            database_url,
            log_level: var_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            otlp_endpoint: non_empty_var("OTEL_EXPORTER_OTLP_ENDPOINT"),
            honeycomb_api_key: non_empty_var("HONEYCOMB_API_KEY"),
            environment: var_or("DEPLOYMENT_ENVIRONMENT", DEFAULT_ENVIRONMENT),
        })
    }

    pub fn exports_traces(&self) -> bool {
        self.otlp_endpoint.is_some()
    }
}

fn var_or(key: &str, default: &str) -> String {
    non_empty_var(key).unwrap_or_else(|| default.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    dotenvy::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn load_environment() -> anyhow::Result<()> {
    let is_production =
        dotenvy::var("ROCKET_PROFILE").unwrap_or("development".to_string()) == "production";

    let env_files = if is_production {
        vec!["config/common.env", "config/prod.env", ".secrets.env"]
    } else {
        vec!["config/common.env", "config/dev.env", ".secrets.env"]
    };

    for env_file in env_files {
        load_env_file(env_file)?;
    }

    Ok(())
}

fn load_env_file(path: &str) -> anyhow::Result<()> {
    if !Path::new(path).exists() {
        warn!("Environment file {} not found, skipping", path);
        return Ok(());
    }

    dotenvy::from_filename_override(path)
        .with_context(|| format!("Failed to load environment file {}", path))?;
    info!("Loaded environment from: {}", path);
    Ok(())
}
