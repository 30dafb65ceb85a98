//! Stage that adds a default `.gitignore`.
use anyhow::Result;

use super::{Context, Task, TaskResult, deploy_spec};
use crate::resources::ResourceChange;
use crate::resources::file::GITIGNORE;

/// Add the default `.gitignore` to the target directory when it has none.
#[derive(Debug)]
pub struct EnsureGitignore;

impl Task for EnsureGitignore {
    fn name(&self) -> &'static str {
        "Add default .gitignore"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        // Follows symlinks: a dangling link counts as absent. Any stat
        // failure runs the stage so the deploy reports it.
        std::fs::metadata(ctx.path_for(&GITIGNORE)).is_err()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        ctx.log.info(&format!("Copying {}", GITIGNORE.display_destination()));
        match deploy_spec(ctx, &GITIGNORE)? {
            ResourceChange::Skipped { reason } => Ok(TaskResult::Skipped(reason)),
            ResourceChange::Applied | ResourceChange::AlreadyCorrect => Ok(TaskResult::Ok),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::prompt::MockConfirm;
    use crate::resources::asset::{self, AssetStore, EmbeddedAssets};
    use crate::resources::test_helpers::RecordingExecutor;
    use crate::tasks::test_helpers::{make_context, never_confirm};
    use std::sync::Arc;

    #[test]
    fn writes_gitignore_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _log) = make_context(dir.path(), Arc::new(RecordingExecutor::new()), never_confirm());

        assert!(EnsureGitignore.should_run(&ctx));
        assert_eq!(EnsureGitignore.run(&ctx).unwrap(), TaskResult::Ok);
        assert_eq!(
            std::fs::read(dir.path().join(".gitignore")).unwrap(),
            EmbeddedAssets.fetch(asset::GITIGNORE).unwrap().content
        );
    }

    #[test]
    fn not_applicable_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "target/\n").unwrap();
        let (ctx, _log) = make_context(dir.path(), Arc::new(RecordingExecutor::new()), never_confirm());

        assert!(!EnsureGitignore.should_run(&ctx));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_replaced_after_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join(".gitignore");
        std::os::unix::fs::symlink("/nonexistent/gitignore", &link).unwrap();
        let mut confirm = MockConfirm::new();
        confirm.expect_confirm().times(1).returning(|_| Ok(true));
        let (ctx, _log) = make_context(dir.path(), Arc::new(RecordingExecutor::new()), confirm);

        assert!(EnsureGitignore.should_run(&ctx));
        assert_eq!(EnsureGitignore.run(&ctx).unwrap(), TaskResult::Ok);
        assert!(!link.symlink_metadata().unwrap().file_type().is_symlink());
    }
}
