// Shared helpers for integration tests.
//
// Provides a temporary project directory, a fake executor that never spawns
// real processes, and a scripted confirm capability so each integration test
// can drive a full provisioning run without a terminal, yarn, npm or git.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use platform_starter::exec::Executor;
use platform_starter::logging::{Log, Logger};
use platform_starter::prompt::Confirm;
use platform_starter::resources::asset::EmbeddedAssets;
use platform_starter::resources::requirement::{REQUIREMENTS, RequirementKind};
use platform_starter::tasks::{Context, ProvisioningContext};

/// A `(working dir, command line)` pair recorded by [`FakeExecutor`].
pub type Invocation = (Option<PathBuf>, String);

/// Executor double: reports a configurable PATH, records every command, and
/// mimics `git init` by creating `.git/hooks` in the working directory.
#[derive(Debug, Default)]
pub struct FakeExecutor {
    on_path: HashSet<String>,
    failing: HashSet<String>,
    invocations: Mutex<Vec<Invocation>>,
}

impl FakeExecutor {
    /// An executor with nothing on PATH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `program` as installed.
    pub fn with_program(mut self, program: &str) -> Self {
        self.on_path.insert(program.to_string());
        self
    }

    /// Report every executable requirement as installed.
    pub fn with_all_executables(self) -> Self {
        REQUIREMENTS
            .iter()
            .filter(|r| r.kind == RequirementKind::Executable)
            .fold(self, |e, r| e.with_program(r.name))
    }

    /// Fail every invocation whose command line starts with `prefix`.
    pub fn failing(mut self, prefix: &str) -> Self {
        self.failing.insert(prefix.to_string());
        self
    }

    /// Every command line run so far, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Every invocation run so far, with its working directory.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, dir: Option<&Path>, program: &str, args: &[&str]) -> anyhow::Result<()> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((dir.map(Path::to_path_buf), line.clone()));

        if self.failing.iter().any(|prefix| line.starts_with(prefix.as_str())) {
            anyhow::bail!("`{program}` exited with code 1");
        }
        if let Some(dir) = dir
            && program == "git"
            && args.first() == Some(&"init")
        {
            std::fs::create_dir_all(dir.join(".git").join("hooks"))?;
        }
        Ok(())
    }
}

impl Executor for FakeExecutor {
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<()> {
        self.record(None, program, args)
    }

    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> anyhow::Result<()> {
        self.record(Some(dir), program, args)
    }

    fn which(&self, program: &str) -> Option<PathBuf> {
        self.on_path
            .contains(program)
            .then(|| PathBuf::from("/usr/local/bin").join(program))
    }
}

/// Confirm double answering from a fixed script; an exhausted script
/// answers "no", like closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    /// Answer with `answers`, in order.
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Every question asked so far.
    pub fn questions(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, question: &str) -> io::Result<bool> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(question.to_string());
        Ok(self
            .answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(false))
    }
}

/// A provisioning run wired to test doubles inside a temporary project.
pub struct Harness {
    /// Temporary project root; deleted on drop.
    pub project: tempfile::TempDir,
    /// Executor shared with `ctx`, for asserting command lines.
    pub executor: Arc<FakeExecutor>,
    /// Prompt shared with `ctx`, for asserting the questions asked.
    pub confirm: Arc<ScriptedConfirm>,
    /// Logger shared with `ctx`, for asserting stage outcomes.
    pub log: Arc<Logger>,
    /// Context the stages run with.
    pub ctx: Context,
}

impl Harness {
    /// Provision the project root itself.
    pub fn new(executor: FakeExecutor, confirm: ScriptedConfirm) -> Self {
        Self::with_target(executor, confirm, Path::new("."))
    }

    /// Provision `dir`, taken relative to the project root.
    pub fn with_target(executor: FakeExecutor, confirm: ScriptedConfirm, dir: &Path) -> Self {
        let project = tempfile::tempdir().expect("create temp dir");
        let executor = Arc::new(executor);
        let confirm = Arc::new(confirm);
        let log = Arc::new(Logger::new("test"));
        let provisioning = ProvisioningContext::resolve_in(project.path().to_path_buf(), dir, false)
            .expect("resolve provisioning context");
        let ctx = Context::new(
            provisioning,
            Arc::clone(&log) as Arc<dyn Log>,
            Arc::clone(&executor) as Arc<dyn Executor>,
            Arc::new(EmbeddedAssets),
            Arc::clone(&confirm) as Arc<dyn Confirm>,
        );
        Self {
            project,
            executor,
            confirm,
            log,
            ctx,
        }
    }

    /// Path to the project root.
    pub fn root(&self) -> &Path {
        self.project.path()
    }

    /// Write `content` to `relative` under the project root.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(path, content).expect("write fixture file");
    }

    /// Read `relative` under the project root as a string.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root().join(relative)).expect("read project file")
    }
}
