//! Package manager discovery and global installs.
use std::path::PathBuf;

use anyhow::Result;

use crate::error::PackageManagerError;
use crate::exec::Executor;
use crate::logging::Log;

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// Preferred, lockfile-aware manager.
    Yarn,
    /// Fallback manager.
    Npm,
}

impl PackageManager {
    /// Manager tried first unless the fallback is forced.
    pub const PRIMARY: Self = Self::Yarn;
    /// Manager used when the primary is missing or forced away.
    pub const FALLBACK: Self = Self::Npm;

    /// Executable name looked up on PATH.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }

    /// Arguments for a global install of `package`.
    #[must_use]
    pub fn global_install_args(self, package: &str) -> Vec<&str> {
        match self {
            Self::Yarn => vec!["global", "add", package],
            Self::Npm => vec!["install", "-g", package],
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}

/// A package manager found on PATH, bound to the executor that runs it.
#[derive(Debug)]
pub struct PackageManagerHandle<'a> {
    /// Which manager was selected.
    pub manager: PackageManager,
    /// Where it was found.
    pub path: PathBuf,
    executor: &'a dyn Executor,
}

impl PackageManagerHandle<'_> {
    /// Install `package` globally.
    ///
    /// # Errors
    ///
    /// Returns an error if the package manager exits unsuccessfully.
    pub fn install_global(&self, package: &str) -> Result<()> {
        self.executor.run(
            self.manager.program(),
            &self.manager.global_install_args(package),
        )
    }
}

/// Find a usable package manager.
///
/// Prefers [`PackageManager::PRIMARY`] unless `force_fallback` is set, and
/// warns when falling back because the primary is missing.
///
/// # Errors
///
/// Returns [`PackageManagerError::NotFound`] when neither manager is on PATH.
pub fn locate<'a>(
    force_fallback: bool,
    executor: &'a dyn Executor,
    log: &dyn Log,
) -> Result<PackageManagerHandle<'a>, PackageManagerError> {
    if !force_fallback {
        if let Some(path) = executor.which(PackageManager::PRIMARY.program()) {
            return Ok(PackageManagerHandle {
                manager: PackageManager::PRIMARY,
                path,
                executor,
            });
        }
        log.warn(&format!(
            "{} is not installed, resorting to install using {}",
            PackageManager::PRIMARY,
            PackageManager::FALLBACK
        ));
    }

    executor
        .which(PackageManager::FALLBACK.program())
        .map(|path| PackageManagerHandle {
            manager: PackageManager::FALLBACK,
            path,
            executor,
        })
        .ok_or_else(|| PackageManagerError::NotFound {
            primary: PackageManager::PRIMARY.to_string(),
            fallback: PackageManager::FALLBACK.to_string(),
        })
}
