use std::process::ExitCode;

use clap::Parser;
use voluntar_lib::cli::Cli;
use voluntar_lib::{bootstrap, resolve_config, run};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_dir = (!config.log_dir.as_os_str().is_empty()).then_some(config.log_dir.as_path());
    if let Err(e) = bootstrap::init_tracing_subscriber(log_dir) {
        eprintln!("Failed to initialize tracing: {e:#}");
    }

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Command failed");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
