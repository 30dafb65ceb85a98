//! External process execution.
//!
//! Every child shares the parent's stdin, stdout and stderr so that prompts
//! from package managers and git are visible and answerable in real time.
//! Calls block until the child exits; there is no timeout.
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ExecError;

/// Abstraction over process execution and PATH lookup.
///
/// Production code uses [`SystemExecutor`]; tests substitute a recording
/// implementation so that no real package manager or git is touched.
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// Run `program` in the current working directory, failing on non-zero exit.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Spawn`] if the program cannot be started and
    /// [`ExecError::Failed`] if it exits unsuccessfully.
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;

    /// Run `program` with `dir` as its working directory, failing on non-zero exit.
    ///
    /// # Errors
    ///
    /// Same as [`Executor::run`].
    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()>;

    /// Resolve `program` against PATH, returning its location if found.
    fn which(&self, program: &str) -> Option<PathBuf>;
}

/// Production [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone)]
pub struct SystemExecutor {
    env: Vec<(String, String)>,
}

impl SystemExecutor {
    /// Create an executor whose children inherit this process's environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value` in the environment of every child.
    #[must_use]
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    fn execute(&self, mut cmd: Command, program: &str) -> Result<()> {
        cmd.envs(self.env.iter().map(|(k, v)| (k, v)));
        tracing::debug!("exec: {program} {:?}", cmd.get_args().collect::<Vec<_>>());
        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ExecError::Spawn {
                program: program.to_string(),
                source,
            })?;
        if !status.success() {
            return Err(ExecError::Failed {
                program: program.to_string(),
                code: status.code(),
            }
            .into());
        }
        Ok(())
    }
}

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        self.execute(cmd, program)
    }

    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(dir);
        self.execute(cmd, program)
    }

    fn which(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}
