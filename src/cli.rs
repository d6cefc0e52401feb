//! CLI parser
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::constants::{ENV_COLOR, ENV_DEBUG, ENV_TARGET};
use crate::target::Service;

#[derive(Parser, Debug)]
#[command(name = "vespa", version, about = "Command line client for Vespa")]
/// CLI Options
pub struct CliOptions {
    #[arg(long, global = true, help = "Enable debug logging", env = ENV_DEBUG)]
    /// Enable debug logging. Env: VESPA_CLI_DEBUG
    pub debug: bool,
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto, env = ENV_COLOR)]
    /// When to use colors in output, defaults to `auto`.
    /// Env: VESPA_CLI_COLOR
    pub color: ColorMode,
    #[command(subcommand)]
    /// What to do
    pub command: Command,
}

/// Top level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify that a service is ready to use (query by default)
    Status(StatusArgs),
}

/// Arguments to `vespa status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[arg(short = 't', long, global = true, env = ENV_TARGET)]
    /// The URL of the target service, or `local`. Defaults to `local`.
    /// Env: VESPA_CLI_TARGET
    pub target: Option<String>,
    #[command(subcommand)]
    /// Service to check, the query API if left out
    pub service: Option<ServiceCommand>,
}

/// Services which can be checked.
#[derive(Subcommand, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ServiceCommand {
    /// Verify that the deploy service is ready to use
    #[command(alias = "config-server")]
    Deploy,
    /// Verify that the query service is ready to use
    #[command(alias = "container")]
    Query,
    /// Verify that the document service is ready to use
    Document,
}

impl From<ServiceCommand> for Service {
    fn from(command: ServiceCommand) -> Self {
        match command {
            ServiceCommand::Deploy => Service::Deploy,
            ServiceCommand::Query => Service::Query,
            ServiceCommand::Document => Service::Document,
        }
    }
}

/// When output is colored.
#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorMode {
    /// Let the environment decide (terminal detection, `NO_COLOR`, `CLICOLOR_FORCE`)
    Auto,
    /// Always
    Always,
    /// Never
    Never,
}

impl ColorMode {
    /// Configures `colored` for the rest of the process.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}
