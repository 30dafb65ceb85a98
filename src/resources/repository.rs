//! Git repository bootstrap.
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::error::RepositoryError;
use crate::exec::Executor;

/// Message of the commit created when a repository is bootstrapped.
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit with platform-starter config";

/// Return whether `root` has a `.git` directory directly beneath it.
#[must_use]
pub fn is_repository(root: &Path) -> bool {
    root.join(".git").is_dir()
}

/// A project root that must be under version control.
#[derive(Debug)]
pub struct RepositoryResource<'a> {
    /// Directory the repository is rooted at.
    pub root: PathBuf,
    executor: &'a dyn Executor,
}

impl<'a> RepositoryResource<'a> {
    /// Create a new repository resource.
    #[must_use]
    pub const fn new(root: PathBuf, executor: &'a dyn Executor) -> Self {
        Self { root, executor }
    }

    /// Initialize the repository, stage everything, and commit.
    ///
    /// The three steps run in order; the first failure stops the sequence
    /// and leaves whatever the earlier steps created in place.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] naming the step that failed.
    pub fn bootstrap(&self) -> Result<(), RepositoryError> {
        let steps: [(&'static str, &[&str]); 3] = [
            ("init", &["init"]),
            ("add", &["add", "-A"]),
            ("commit", &["commit", "-am", INITIAL_COMMIT_MESSAGE]),
        ];
        for (step, args) in steps {
            self.executor
                .run_in(&self.root, "git", args)
                .map_err(|source| RepositoryError { step, source })?;
        }
        Ok(())
    }
}

impl Applicable for RepositoryResource<'_> {
    fn description(&self) -> String {
        format!("git repository at {}", self.root.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        if is_repository(&self.root) {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        self.bootstrap()?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for RepositoryResource<'_> {
    fn current_state(&self) -> Result<ResourceState> {
        Ok(if is_repository(&self.root) {
            ResourceState::Correct
        } else {
            ResourceState::Missing
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::resources::test_helpers::RecordingExecutor;

    #[test]
    fn bootstrap_runs_init_add_commit_in_root() {
        let dir = tempfile::tempdir().unwrap();
        let executor = RecordingExecutor::new();
        let repo = RepositoryResource::new(dir.path().to_path_buf(), &executor);
        assert_eq!(repo.current_state().unwrap(), ResourceState::Missing);

        assert_eq!(repo.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(
            executor.command_lines(),
            vec![
                "git init".to_string(),
                "git add -A".to_string(),
                format!("git commit -am {INITIAL_COMMIT_MESSAGE}"),
            ]
        );
        assert!(
            executor
                .calls()
                .iter()
                .all(|(cwd, _, _)| cwd.as_deref() == Some(dir.path()))
        );
    }

    #[test]
    fn commit_message_is_a_single_argument() {
        let dir = tempfile::tempdir().unwrap();
        let executor = RecordingExecutor::new();
        RepositoryResource::new(dir.path().to_path_buf(), &executor)
            .bootstrap()
            .unwrap();
        let calls = executor.calls();
        assert_eq!(calls[2].2, vec!["commit", "-am", INITIAL_COMMIT_MESSAGE]);
    }

    #[test]
    fn existing_repository_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let executor = RecordingExecutor::new();
        let repo = RepositoryResource::new(dir.path().to_path_buf(), &executor);
        assert_eq!(repo.current_state().unwrap(), ResourceState::Correct);
        assert_eq!(repo.apply().unwrap(), ResourceChange::AlreadyCorrect);
        assert!(executor.calls().is_empty());
    }

    #[test]
    fn git_file_is_not_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".git"), "gitdir: elsewhere").unwrap();
        assert!(!is_repository(dir.path()));
    }

    #[test]
    fn failing_step_stops_the_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let executor = RecordingExecutor::new().failing("git");
        let err = RepositoryResource::new(dir.path().to_path_buf(), &executor)
            .bootstrap()
            .unwrap_err();
        assert_eq!(err.step, "init");
        assert_eq!(executor.calls().len(), 1);
    }
}
