use crate::errors::StartupError;

const DEFAULT_PORT: u16 = 5173;

/// Runtime configuration, resolved once at startup and passed explicitly
/// to the bootstrap routine.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StartupError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| StartupError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: lookup("DATABASE_URL"),
        })
    }
}
