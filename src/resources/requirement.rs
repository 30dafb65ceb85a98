//! Required tools and libraries, installed through a package manager.
use anyhow::Result;

use super::package_manager::locate;
use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::error::InstallError;
use crate::exec::Executor;
use crate::logging::Log;

/// How a requirement's presence is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    /// Present iff an executable with this name is on PATH.
    Executable,
    /// A library with no executable of its own; always (re)installed.
    Package,
}

/// A declared dependency of the provisioning workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    /// Package name, also the executable name for [`RequirementKind::Executable`].
    pub name: &'static str,
    /// How presence is judged.
    pub kind: RequirementKind,
}

impl Requirement {
    /// Declare a requirement.
    #[must_use]
    pub const fn new(name: &'static str, kind: RequirementKind) -> Self {
        Self { name, kind }
    }
}

/// Everything the deployed configuration and pre-commit hook rely on,
/// in installation order.
pub const REQUIREMENTS: &[Requirement] = &[
    Requirement::new("csscomb", RequirementKind::Executable),
    Requirement::new("editorconfig-tools", RequirementKind::Executable),
    Requirement::new("eslint", RequirementKind::Executable),
    Requirement::new("prettier", RequirementKind::Executable),
    Requirement::new("svgo", RequirementKind::Executable),
    Requirement::new("eslint-plugin-prettier", RequirementKind::Package),
    Requirement::new("eslint-config-airbnb-base", RequirementKind::Package),
    Requirement::new("eslint-plugin-import", RequirementKind::Package),
];

/// A requirement bound to the executor and package manager preference used
/// to check and install it.
#[derive(Debug)]
pub struct RequirementResource<'a> {
    /// The requirement being ensured.
    pub requirement: Requirement,
    force_fallback: bool,
    executor: &'a dyn Executor,
    log: &'a dyn Log,
}

impl<'a> RequirementResource<'a> {
    /// Create a new requirement resource.
    #[must_use]
    pub const fn new(
        requirement: Requirement,
        force_fallback: bool,
        executor: &'a dyn Executor,
        log: &'a dyn Log,
    ) -> Self {
        Self {
            requirement,
            force_fallback,
            executor,
            log,
        }
    }

    /// Install the requirement through the first available package manager.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError`] if no package manager is available or the
    /// install command fails.
    pub fn install(&self) -> Result<(), InstallError> {
        let name = self.requirement.name;
        self.log.info(&format!("installing {name}..."));
        let wrap = |source: anyhow::Error| InstallError {
            package: name.to_string(),
            source,
        };
        let handle = locate(self.force_fallback, self.executor, self.log)
            .map_err(|e| wrap(e.into()))?;
        self.log.debug(&format!(
            "using {} at {}",
            handle.manager,
            handle.path.display()
        ));
        handle.install_global(name).map_err(wrap)
    }

    /// Check, and install if needed.
    ///
    /// Executables already on PATH are left alone; packages are always
    /// installed.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError`] if installation is needed and fails.
    pub fn ensure_installed(&self) -> Result<ResourceChange, InstallError> {
        match self.state() {
            ResourceState::Correct => Ok(ResourceChange::AlreadyCorrect),
            ResourceState::Missing | ResourceState::Incorrect { .. } => {
                if self.requirement.kind == RequirementKind::Executable {
                    self.log.warn(&format!(
                        "looks like `{}` is not installed",
                        self.requirement.name
                    ));
                }
                self.install()?;
                Ok(ResourceChange::Applied)
            }
        }
    }

    fn state(&self) -> ResourceState {
        match self.requirement.kind {
            RequirementKind::Executable if self.executor.which(self.requirement.name).is_some() => {
                ResourceState::Correct
            }
            RequirementKind::Executable | RequirementKind::Package => ResourceState::Missing,
        }
    }
}

impl Applicable for RequirementResource<'_> {
    fn description(&self) -> String {
        let kind = match self.requirement.kind {
            RequirementKind::Executable => "executable",
            RequirementKind::Package => "package",
        };
        format!("{} ({kind})", self.requirement.name)
    }

    fn apply(&self) -> Result<ResourceChange> {
        self.install()?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for RequirementResource<'_> {
    fn current_state(&self) -> Result<ResourceState> {
        Ok(self.state())
    }
}
