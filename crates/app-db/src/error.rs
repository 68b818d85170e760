use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("[Connection] {}", _0)]
    Connection(#[from] diesel::ConnectionError),
    #[error("[Query] {}", _0)]
    Query(#[from] diesel::result::Error),
    #[error("[MalformedRow] {table}: {reason}")]
    MalformedRow { table: &'static str, reason: String },
}
