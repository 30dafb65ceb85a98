//! Deployment of template assets into the project.
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::asset::{self, Asset};
use super::helpers::fs::{ensure_parent_dir, occupied, remove_existing, write_with_mode};
use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::error::DeployError;
use crate::logging::Log;
use crate::prompt::Confirm;

/// Question asked before replacing an existing destination.
pub const OVERWRITE_QUESTION: &str = "Do you want to overwrite it?";

/// Base directory a destination is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The directory the tool was started in.
    ProjectRoot,
    /// The directory passed with `--dir`.
    TargetDir,
}

/// Where an asset is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
    /// Name of the asset in the asset store.
    pub asset: &'static str,
    /// Destination path components, relative to the anchor. Never empty.
    pub destination: &'static [&'static str],
    /// Which base directory the destination is relative to.
    pub anchor: Anchor,
    /// Create missing directories between the anchor and the file.
    pub create_parents: bool,
}

impl FileSpec {
    /// Declare a file spec.
    ///
    /// # Panics
    ///
    /// Fails const evaluation if `destination` is empty.
    #[must_use]
    pub const fn new(
        asset: &'static str,
        destination: &'static [&'static str],
        anchor: Anchor,
    ) -> Self {
        assert!(!destination.is_empty(), "destination must not be empty");
        Self {
            asset,
            destination,
            anchor,
            create_parents: false,
        }
    }

    /// Same spec, but missing intermediate directories are created on write.
    #[must_use]
    pub const fn with_parent_dirs(self) -> Self {
        Self {
            create_parents: true,
            ..self
        }
    }

    /// Absolute destination for this spec.
    #[must_use]
    pub fn path(&self, project_root: &Path, target_dir: &Path) -> PathBuf {
        let base = match self.anchor {
            Anchor::ProjectRoot => project_root,
            Anchor::TargetDir => target_dir,
        };
        self.destination
            .iter()
            .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
    }

    /// Destination relative to its anchor, joined with `/` for display.
    #[must_use]
    pub fn display_destination(&self) -> String {
        self.destination.join("/")
    }
}

/// Configuration files deployed on every run, in order.
pub const CONFIG_FILES: &[FileSpec] = &[
    FileSpec::new(asset::CSSCOMB, &[".csscomb.json"], Anchor::TargetDir),
    FileSpec::new(asset::ESLINTRC, &[".eslintrc.js"], Anchor::TargetDir),
    FileSpec::new(asset::EDITORCONFIG, &[".editorconfig"], Anchor::ProjectRoot),
];

/// Default ignore file, deployed only when none exists.
pub const GITIGNORE: FileSpec = FileSpec::new(asset::GITIGNORE, &[".gitignore"], Anchor::TargetDir);

/// Pre-commit hook, deployed after the repository is known to exist.
///
/// `.git/hooks` is created if the repository was initialized without it.
pub const PRECOMMIT_HOOK: FileSpec = FileSpec::new(
    asset::PRE_COMMIT,
    &[".git", "hooks", "pre-commit"],
    Anchor::ProjectRoot,
)
.with_parent_dirs();

/// An asset bound to its resolved destination.
#[derive(Debug, Clone)]
pub struct FileResource {
    /// Asset to write.
    pub asset: Asset,
    /// Absolute destination path.
    pub target: PathBuf,
    /// Create the destination's parent directories before writing.
    pub create_parents: bool,
}

impl FileResource {
    /// Create a new file resource. The destination's directory must exist.
    #[must_use]
    pub const fn new(asset: Asset, target: PathBuf) -> Self {
        Self {
            asset,
            target,
            create_parents: false,
        }
    }

    /// Set whether missing parent directories are created on write.
    #[must_use]
    pub const fn creating_parents(mut self, create: bool) -> Self {
        self.create_parents = create;
        self
    }

    /// Write the asset, asking before replacing anything already there.
    ///
    /// A declined overwrite leaves the destination untouched and is reported
    /// as [`ResourceChange::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`DeployError`] if the destination cannot be inspected,
    /// removed, or written, or if the answer cannot be read.
    pub fn deploy(&self, confirm: &dyn Confirm, log: &dyn Log) -> Result<ResourceChange, DeployError> {
        if self.exists()? {
            log.warn(&format!("file {} already exists", self.target.display()));
            let overwrite =
                confirm
                    .confirm(OVERWRITE_QUESTION)
                    .map_err(|source| DeployError::Prompt {
                        path: self.target.clone(),
                        source,
                    })?;
            if !overwrite {
                log.info(&format!("keeping existing {}", self.target.display()));
                return Ok(ResourceChange::Skipped {
                    reason: "overwrite declined".to_string(),
                });
            }
        }
        self.write()?;
        Ok(ResourceChange::Applied)
    }

    fn exists(&self) -> Result<bool, DeployError> {
        occupied(&self.target).map_err(|source| DeployError::Stat {
            path: self.target.clone(),
            source,
        })
    }

    fn write(&self) -> Result<(), DeployError> {
        let write_err = |source| DeployError::Write {
            path: self.target.clone(),
            source,
        };
        if self.create_parents {
            ensure_parent_dir(&self.target).map_err(write_err)?;
        }
        remove_existing(&self.target).map_err(|source| DeployError::Remove {
            path: self.target.clone(),
            source,
        })?;
        write_with_mode(&self.target, self.asset.content, self.asset.mode).map_err(write_err)
    }
}

impl Applicable for FileResource {
    fn description(&self) -> String {
        self.target.display().to_string()
    }

    fn apply(&self) -> Result<ResourceChange> {
        self.write()?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for FileResource {
    fn current_state(&self) -> Result<ResourceState> {
        if self.exists()? {
            Ok(ResourceState::Incorrect {
                current: "file exists".to_string(),
            })
        } else {
            Ok(ResourceState::Missing)
        }
    }
}
