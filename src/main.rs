//! `platform-starter` binary.
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use platform_starter::cli::Cli;
use platform_starter::commands::init;
use platform_starter::logging::{Logger, init_subscriber};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    init_subscriber(init::COMMAND);
    let log = Arc::new(Logger::new(init::COMMAND));

    match init::run(&args, &log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
