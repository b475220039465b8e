use std::process::ExitCode;

use clap::Parser;
use pennant::adapter::inbound::cli::{self, command::Cli};

#[tokio::main]
async fn main() -> ExitCode {
    cli::run(Cli::parse()).await
}
