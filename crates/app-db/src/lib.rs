mod database;
mod error;
mod models;
mod sql;

pub use database::{Database, IndexerStore};
pub use error::Error;
pub use models::{Action, ActionKind, Row, SYSTEM_ACCOUNT};

pub type Result<T> = std::result::Result<T, Error>;
