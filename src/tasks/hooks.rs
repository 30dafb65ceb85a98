//! Stage that installs the pre-commit hook.
use anyhow::Result;

use super::{Context, Task, TaskResult, deploy_spec};
use crate::resources::ResourceChange;
use crate::resources::file::PRECOMMIT_HOOK;

/// Install the pre-commit hook into `.git/hooks/`.
///
/// Runs after the repository stage, so `.git` is expected to exist.
#[derive(Debug)]
pub struct InstallPrecommitHook;

impl Task for InstallPrecommitHook {
    fn name(&self) -> &'static str {
        "Install pre-commit hook"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        match deploy_spec(ctx, &PRECOMMIT_HOOK)? {
            ResourceChange::Skipped { reason } => Ok(TaskResult::Skipped(reason)),
            ResourceChange::Applied | ResourceChange::AlreadyCorrect => Ok(TaskResult::Ok),
        }
    }
}
