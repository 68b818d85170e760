mod cli;
mod error;

pub use cli::{Cli, Invocation};
pub use error::Error;

use std::ffi::OsString;
use transfer_finder_core::Config;
use transfer_finder_db::Database;
use transfer_finder_transfers::fetch_transfers;

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: &str = "transfer_finder=debug";
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: &str = "transfer_finder=info";

/// Parses `args`, looks the block up and returns the result rendered as
/// pretty-printed JSON, or the help/version text when that was asked for.
///
/// Arguments are checked before the environment is read or a connection is
/// opened. The database work is blocking and runs off the async runtime.
pub async fn run<I, T>(args: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::from_args(args)? {
        Invocation::Lookup(cli) => cli,
        Invocation::Info(text) => return Ok(text),
    };
    let config = Config::from_env()?;
    log::debug!("Starting with {:?}, {:?}", cli, config);

    let block_height = cli.block_height;
    let transfers = tokio::task::spawn_blocking(move || {
        let mut database = Database::connect(&config.database_uri)?;
        fetch_transfers(&mut database, block_height)
    })
    .await??;

    Ok(serde_json::to_string_pretty(&transfers)?)
}
