mod config;
mod error;
mod redacted;

pub use config::{load_env_file, Config, DATABASE_URI};
pub use error::ConfigError;
pub use redacted::Redacted;
