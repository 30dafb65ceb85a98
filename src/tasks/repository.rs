//! Stage that puts the project under git.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::repository::{RepositoryResource, is_repository};

/// Put the project root under git with a single initial commit.
#[derive(Debug)]
pub struct BootstrapRepository;

impl Task for BootstrapRepository {
    fn name(&self) -> &'static str {
        "Initialize git repository"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !is_repository(ctx.project_root())
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        ctx.log.warn("current directory is not a git repository");
        RepositoryResource::new(ctx.project_root().to_path_buf(), ctx.executor.as_ref())
            .bootstrap()?;
        Ok(TaskResult::Ok)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resources::test_helpers::RecordingExecutor;
    use crate::tasks::test_helpers::{make_context, never_confirm};
    use std::sync::Arc;

    #[test]
    fn bootstraps_when_no_repository() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Arc::new(RecordingExecutor::new());
        let (ctx, _log) = make_context(dir.path(), executor.clone(), never_confirm());

        assert!(BootstrapRepository.should_run(&ctx));
        BootstrapRepository.run(&ctx).unwrap();
        assert_eq!(executor.calls().len(), 3);
    }

    #[test]
    fn not_applicable_inside_repository() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let (ctx, _log) = make_context(dir.path(), Arc::new(RecordingExecutor::new()), never_confirm());

        assert!(!BootstrapRepository.should_run(&ctx));
    }

    #[test]
    fn failed_commit_is_reported_by_step() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Arc::new(RecordingExecutor::new().failing("git"));
        let (ctx, _log) = make_context(dir.path(), executor, never_confirm());

        let err = BootstrapRepository.run(&ctx).unwrap_err();
        assert_eq!(err.to_string(), "git init failed");
    }
}
