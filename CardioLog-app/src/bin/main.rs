use anyhow::Context;
use dotenv::dotenv;
use tracing::{debug, warn};

use cardio_log_app::commands::{execute, Command, CommandError, USAGE};
use cardio_log_app::config::AppConfig;
use cardio_log_app::logging::init_tracing;
use cardio_log_domain::repository::JournalRepository;
use cardio_log_domain::services::JournalService;

/// The entry point for the `cardiolog` command
///
/// This function:
/// 1. Loads environment variables from a .env file if present
/// 2. Sets up tracing for logging
/// 3. Opens the journal from the configured storage
/// 4. Runs one command and prints its output
fn main() -> anyhow::Result<()> {
    let dotenv_loaded = dotenv().is_ok();

    init_tracing();

    if !dotenv_loaded {
        debug!(".env file not found, using process environment");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(CommandError::Usage(message)) => {
            eprintln!("{}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let repository = JournalRepository::from_config(&config.storage);
    if !repository.is_persistent() {
        warn!("Readings will not be kept after this command exits");
    }

    let mut journal = JournalService::load(repository).context("Failed to load journal")?;

    let output = execute(command, &mut journal, &config)?;
    print!("{}", output);

    Ok(())
}
