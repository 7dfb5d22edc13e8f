use clap::Parser;
use std::process;
use tracing::{error, info};

use maintctl::cli::Cli;
use maintctl::config::LogConfig;
use maintctl::logging::{self, RUN_SEPARATOR};
use maintctl::run;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let log_config = LogConfig::from_cli(&cli);

    if let Err(e) = logging::init(&log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("{}", RUN_SEPARATOR);
    info!(
        "{} maintenance run starting against {}",
        log_config.variant,
        cli.command.connection().server
    );

    let result = run::execute(&cli).await;

    let code = match &result {
        Ok(()) => {
            info!("{} maintenance run completed", log_config.variant);
            0
        }
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    };

    info!("{}", RUN_SEPARATOR);
    process::exit(code);
}
