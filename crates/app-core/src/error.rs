use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} env var had to be provided")]
    Missing { var: &'static str },
    #[error("{var} env var is not valid unicode")]
    NotUnicode { var: &'static str },
    #[error("[EnvFile] {}", _0)]
    EnvFile(#[from] dotenv::Error),
}
