use crate::{ConfigError, Redacted};
use std::{
    env::{self, VarError},
    path::PathBuf,
};

pub const DATABASE_URI: &str = "DATABASE_URI";

/// Loads a `.env` file from the working directory into the process
/// environment. Variables already set take precedence. A missing file is not
/// an error.
pub fn load_env_file() -> Result<Option<PathBuf>, ConfigError> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_uri: Redacted<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key))
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let database_uri = match lookup(DATABASE_URI) {
            Ok(uri) if !uri.trim().is_empty() => uri,
            Ok(_) | Err(VarError::NotPresent) => {
                return Err(ConfigError::Missing { var: DATABASE_URI })
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode { var: DATABASE_URI })
            }
        };

        Ok(Self {
            database_uri: database_uri.into(),
        })
    }
}
