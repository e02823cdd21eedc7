use std::env;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/proshop";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: resolve_database_url(env::var("DATABASE_URL").ok()),
        }
    }
}

/// Falls back to the local development database when the variable is unset or blank.
pub fn resolve_database_url(value: Option<String>) -> String {
    value
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}
