use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub pld_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?,
            jwt_secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            pld_url: std::env::var("PLD_URL").context("PLD_URL is not set")?,
        })
    }
}
