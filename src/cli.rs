//! Command-line arguments.
use std::path::PathBuf;

use clap::Parser;

/// Command-line interface of the project bootstrapper.
#[derive(Parser, Debug)]
#[command(
    name = "platform-starter",
    about = "Initialize platform projects with common configuration",
    version = crate::VERSION
)]
pub struct Cli {
    /// Directory to initialize
    #[arg(long, value_name = "PATH", default_value = ".", env = "PLATFORM_STARTER_DIR")]
    pub dir: PathBuf,

    /// Install requirements with npm instead of yarn
    #[arg(long, env = "PLATFORM_STARTER_NPM")]
    pub npm: bool,
}
