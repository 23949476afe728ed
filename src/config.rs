pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
        })
    }

    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self, std::env::VarError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}
