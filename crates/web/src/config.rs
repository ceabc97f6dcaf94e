use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub api_keys: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_max_connections: match std::env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(value) => value
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?,
                Err(_) => 5,
            },
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            seed_demo: std::env::var("SEED_DEMO")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}
