use thiserror::Error;
use tokio::task::JoinError;
use transfer_finder_core::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", _0)]
    Usage(String),
    #[error("[Config] {}", _0)]
    Config(#[from] ConfigError),
    #[error("{}", _0)]
    Db(#[from] transfer_finder_db::Error),
    #[error("[Output] {}", _0)]
    Output(#[from] serde_json::Error),
    #[error("[Join] {}", _0)]
    Join(#[from] JoinError),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}
