//! Project bootstrapper for platform projects.
//!
//! Installs the lint and format tooling a project relies on, deploys a
//! fixed set of configuration files, puts the project under git, and
//! installs a pre-commit hook. Every run is a single linear pass that stops
//! at the first failure.
//!
//! The public API is organised into layers:
//!
//! - **[`resources`]** - idempotent `check + apply` primitives (package
//!   managers, requirements, assets, files, repositories)
//! - **[`tasks`]** - named stages wired to resources, run in a fixed order
//! - **[`commands`]** - top-level orchestration of a run
//!
//! Supporting modules: [`cli`] for argument parsing, [`error`] for typed
//! errors, [`exec`] and [`prompt`] for the injected process and
//! confirmation capabilities, and [`logging`] for output and the run summary.
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod logging;
pub mod prompt;
pub mod resources;
pub mod tasks;

/// Version reported by `--version` and in the log header.
pub const VERSION: &str = match option_env!("PLATFORM_STARTER_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
