//! Stage that installs the required tooling.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::ResourceChange;
use crate::resources::requirement::{REQUIREMENTS, RequirementResource};

/// Install every required tool and library, one after another.
#[derive(Debug)]
pub struct InstallRequirements;

impl Task for InstallRequirements {
    fn name(&self) -> &'static str {
        "Install requirements"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut installed = 0usize;
        for requirement in REQUIREMENTS {
            let resource = RequirementResource::new(
                *requirement,
                ctx.provisioning.use_fallback_package_manager,
                ctx.executor.as_ref(),
                ctx.log.as_ref(),
            );
            match resource.ensure_installed()? {
                ResourceChange::AlreadyCorrect => {
                    ctx.log.debug(&format!("ok: {} (already installed)", requirement.name));
                }
                ResourceChange::Applied | ResourceChange::Skipped { .. } => installed += 1,
            }
        }
        ctx.log.info(&format!(
            "{installed} installed, {} already present",
            REQUIREMENTS.len() - installed
        ));
        Ok(TaskResult::Ok)
    }
}
