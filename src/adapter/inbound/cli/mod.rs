//! CLI module graph and dispatch.
//!
//! Exit codes: `0` feasible (or success), `1` error, `2` infeasible,
//! `3` unknown.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod input;
pub mod output;
pub mod solve;
pub mod standings;

use std::path::Path;
use std::process::ExitCode;

use crate::application::Outcome;
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;

use command::{Cli, Commands, ConfigCommand};
use output::OutputConfig;

pub const EXIT_ERROR: u8 = 1;
pub const EXIT_INFEASIBLE: u8 = 2;
pub const EXIT_UNKNOWN: u8 = 3;

/// Run a parsed command line and map the result to an exit code.
pub async fn run(cli: Cli) -> ExitCode {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let (result, config_path) = match &cli.command {
        Commands::Solve(args) => (
            solve::execute(args).await.map(|o| exit_code(&o)),
            args.config.as_deref(),
        ),
        Commands::Standings(args) => (
            standings::execute(args).map(|()| ExitCode::SUCCESS),
            args.config.as_deref(),
        ),
        Commands::Config(ConfigCommand::Show(arg)) => (
            config::execute_show(arg.config.as_deref()).map(|()| ExitCode::SUCCESS),
            arg.config.as_deref(),
        ),
        Commands::Config(ConfigCommand::Validate(arg)) => (
            config::execute_validate(arg.config.as_deref()).map(|()| ExitCode::SUCCESS),
            arg.config.as_deref(),
        ),
    };

    result.unwrap_or_else(|e| {
        report_error(&e, config_path);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Exit code for a solve verdict.
#[must_use]
pub fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Feasible(_) => ExitCode::SUCCESS,
        Outcome::Infeasible => ExitCode::from(EXIT_INFEASIBLE),
        Outcome::Unknown => ExitCode::from(EXIT_UNKNOWN),
    }
}

/// Load the configuration at `path` (or the defaults) and start logging.
///
/// `-v` raises the configured level to debug, `-vv` to trace.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut logging = config.logging.clone();
    match output::verbosity() {
        0 => {}
        1 => logging.level = "debug".into(),
        _ => logging.level = "trace".into(),
    }
    logging.init();

    Ok(config)
}

fn report_error(err: &Error, config_path: Option<&Path>) {
    if !output::is_json() {
        let diagnostic = config_path
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|src| diagnostic::config_diagnostic(err, &src));
        if let Some(diagnostic) = diagnostic {
            eprintln!("{:?}", miette::Report::new(diagnostic));
            return;
        }
    }
    output::error(&err.to_string());
}
