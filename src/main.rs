use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use vespa_cli::client::UreqClient;
use vespa_cli::config::setup_logging;

fn main() -> ExitCode {
    let cli = vespa_cli::cli::CliOptions::parse();

    // setup_logging reports its own failure, output still works without it
    let _ = setup_logging(cli.debug);

    let client = UreqClient::new();
    let mut stdout = std::io::stdout().lock();
    match vespa_cli::commands::run(&cli, &client, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("Application error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
