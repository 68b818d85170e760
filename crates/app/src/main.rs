use std::process::ExitCode;
use transfer_finder::LOG_LEVEL;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> ExitCode {
    let env_file = transfer_finder_core::load_env_file();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(LOG_LEVEL)).init();
    match env_file {
        Ok(Some(path)) => log::debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(err) => log::warn!("Ignoring .env file: {}", err),
    }

    match transfer_finder::run(std::env::args_os()).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
