use crate::Error;
use clap::{error::ErrorKind, Parser};
use std::ffi::OsString;

const HINT: &str = "HINT: transfer-finder 10000001";

/// Look up the transactions behind the TRANSFER receipts of a block.
#[derive(Debug, Parser)]
#[command(name = "transfer-finder", version)]
pub struct Cli {
    /// Height of the block to search
    #[arg(value_parser = clap::value_parser!(i64).range(0..))]
    pub block_height: i64,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    Lookup(Cli),
    /// `--help` or `--version` text, meant for stdout.
    Info(String),
}

impl Cli {
    /// Like `Parser::try_parse_from`, but folds every failure into
    /// [`Error::Usage`] and hands `--help`/`--version` back as text.
    pub fn from_args<I, T>(args: I) -> Result<Invocation, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Lookup(cli)),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(Invocation::Info(err.to_string().trim_end().to_string()))
                }
                _ => Err(Error::Usage(format!(
                    "{}\n{}",
                    err.to_string().trim_end(),
                    HINT
                ))),
            },
        }
    }
}
