use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::exec::Executor;
use crate::logging::Log;
use crate::prompt::Confirm;
use crate::resources::asset::AssetStore;
use crate::resources::file::FileSpec;

/// Directories and preferences fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningContext {
    /// Directory the tool was started in; the repository is rooted here.
    pub project_root: PathBuf,
    /// Directory passed with `--dir`, made absolute.
    pub target_dir: PathBuf,
    /// Install with the fallback package manager even if the primary exists.
    pub use_fallback_package_manager: bool,
}

impl ProvisioningContext {
    /// Creates a context from already-resolved directories.
    #[must_use]
    pub const fn new(project_root: PathBuf, target_dir: PathBuf, use_fallback: bool) -> Self {
        Self {
            project_root,
            target_dir,
            use_fallback_package_manager: use_fallback,
        }
    }

    /// Resolve against the process's working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn resolve(dir: &Path, use_fallback: bool) -> Result<Self> {
        let cwd = std::env::current_dir().context("unable to determine the working directory")?;
        Self::resolve_in(cwd, dir, use_fallback)
    }

    /// Resolve with `cwd` as the project root; a relative `dir` is taken
    /// relative to it. Symlinks are not followed and `dir` need not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be made absolute (e.g. it is empty).
    pub fn resolve_in(cwd: PathBuf, dir: &Path, use_fallback: bool) -> Result<Self> {
        let joined = cwd.join(dir);
        let absolute = std::path::absolute(&joined)
            .with_context(|| format!("invalid target directory: {}", dir.display()))?;
        let target_dir = dunce::simplified(&absolute).to_path_buf();
        Ok(Self::new(cwd, target_dir, use_fallback))
    }
}

/// Shared context for stage execution.
pub struct Context {
    /// Directories and preferences for this run.
    pub provisioning: ProvisioningContext,
    /// Logger for output and stage recording.
    pub log: Arc<dyn Log>,
    /// Command executor (for testing or real system calls).
    pub executor: Arc<dyn Executor>,
    /// Source of template files.
    pub assets: Arc<dyn AssetStore>,
    /// Asks before overwriting existing files.
    pub confirm: Arc<dyn Confirm>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("provisioning", &self.provisioning)
            .field("log", &"<dyn Log>")
            .field("executor", &"<dyn Executor>")
            .field("assets", &self.assets)
            .field("confirm", &"<dyn Confirm>")
            .finish()
    }
}

impl Context {
    /// Creates a new context for stage execution.
    #[must_use]
    pub const fn new(
        provisioning: ProvisioningContext,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
        assets: Arc<dyn AssetStore>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self {
            provisioning,
            log,
            executor,
            assets,
            confirm,
        }
    }

    /// Directory the repository is rooted at.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.provisioning.project_root
    }

    /// Directory being initialized.
    #[must_use]
    pub fn target_dir(&self) -> &Path {
        &self.provisioning.target_dir
    }

    /// Absolute destination of `spec` for this run.
    #[must_use]
    pub fn path_for(&self, spec: &FileSpec) -> PathBuf {
        spec.path(self.project_root(), self.target_dir())
    }
}
