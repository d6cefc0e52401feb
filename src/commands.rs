//! Command implementations.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{CliOptions, Command, StatusArgs};
use crate::client::HttpClient;
use crate::output;
use crate::status::probe;
use crate::target::{Service, Target};

/// Runs the parsed command, writing user facing output to `out`.
///
/// Returns whether everything checked was ready; errors are only returned
/// when output could not be written.
pub fn run(options: &CliOptions, client: &dyn HttpClient, out: &mut dyn Write) -> Result<bool> {
    options.color.apply();
    match &options.command {
        Command::Status(args) => status(args, client, out),
    }
}

/// `vespa status [deploy|query|document] [-t target]`
pub fn status(args: &StatusArgs, client: &dyn HttpClient, out: &mut dyn Write) -> Result<bool> {
    let service = args.service.map(Service::from).unwrap_or(Service::Query);

    let target = match Target::resolve(service, args.target.as_deref()) {
        Ok(target) => target,
        Err(err) => {
            output::error(out, &err).context("Failed to write output")?;
            return Ok(false);
        }
    };
    debug!("Checking {} at {}", service.label(), target.status_url());

    let result = probe(client, &target);
    output::status(out, &result).context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;
    Ok(result.is_ready())
}
