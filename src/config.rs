use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the environment. Every variable is required;
    /// a missing or malformed one aborts startup.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .context("JWT_TTL_MINUTES must be set")?
                .parse::<i64>()
                .context("JWT_TTL_MINUTES must be an integer number of minutes")?,
        };
        let port = std::env::var("APP_PORT")
            .context("APP_PORT must be set")?
            .parse::<u16>()
            .context("APP_PORT must be a valid port number")?;
        Ok(Self {
            database_url,
            jwt,
            port,
        })
    }
}
