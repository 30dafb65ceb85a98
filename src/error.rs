//! Domain-specific error types for the provisioning engine.
//!
//! Resources return these typed errors; tasks and the command handler carry
//! them inside [`anyhow::Error`] via `?`, and the binary's single top-level
//! handler reports the chain and turns it into a non-zero exit.
//!
//! ```text
//! PackageManagerError - neither yarn nor npm on PATH
//! InstallError        - a requirement failed to install
//! DeployError         - stat/remove/write of a destination
//! RepositoryError     - git init/add/commit failed
//! AssetError          - unknown embedded asset
//! ExecError           - child process spawn/exit failures
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating a package manager.
#[derive(Error, Debug)]
pub enum PackageManagerError {
    /// Neither the primary nor the fallback executable is on PATH.
    #[error("{primary} and {fallback} are not installed")]
    NotFound {
        /// Name of the preferred package manager.
        primary: String,
        /// Name of the fallback package manager.
        fallback: String,
    },
}

/// A requirement failed to install.
#[derive(Error, Debug)]
#[error("unable to install `{package}`")]
pub struct InstallError {
    /// Name of the package that could not be installed.
    pub package: String,
    /// Underlying failure (missing package manager or failed command).
    #[source]
    pub source: anyhow::Error,
}

/// Errors that arise while materializing an asset at its destination.
#[derive(Error, Debug)]
pub enum DeployError {
    /// The destination could not be inspected.
    #[error("unable to stat {path}")]
    Stat {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The existing destination could not be removed before overwriting.
    #[error("unable to remove file {path}")]
    Remove {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The asset bytes could not be written.
    #[error("unable to write {path}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The overwrite confirmation could not be read.
    #[error("unable to read overwrite confirmation for {path}")]
    Prompt {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// One of the repository bootstrap commands failed.
#[derive(Error, Debug)]
#[error("git {step} failed")]
pub struct RepositoryError {
    /// The git subcommand that failed (`init`, `add`, `commit`).
    pub step: &'static str,
    /// Underlying command failure.
    #[source]
    pub source: anyhow::Error,
}

/// Errors raised when running an external command.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The program could not be started at all.
    #[error("failed to execute `{program}`")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The program ran but did not exit successfully.
    #[error("`{program}` {}", describe_exit(*.code))]
    Failed {
        /// Program that was invoked.
        program: String,
        /// Exit code, or `None` if the process was terminated by a signal.
        code: Option<i32>,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(
        || "was terminated by a signal".to_string(),
        |c| format!("exited with code {c}"),
    )
}

/// Errors raised by an [`AssetStore`](crate::resources::asset::AssetStore).
#[derive(Error, Debug)]
pub enum AssetError {
    /// No asset is registered under this name.
    #[error("asset {0} not found")]
    Missing(String),
}
