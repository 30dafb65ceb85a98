//! Stage that copies the lint and editor configuration files.
use anyhow::Result;

use super::{Context, Task, TaskResult, deploy_spec};
use crate::resources::ResourceChange;
use crate::resources::file::CONFIG_FILES;

/// Copy the lint, format and editor configuration into the project.
#[derive(Debug)]
pub struct DeployConfigFiles;

impl Task for DeployConfigFiles {
    fn name(&self) -> &'static str {
        "Copy configuration files"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut kept = Vec::new();
        for spec in CONFIG_FILES {
            let destination = spec.display_destination();
            ctx.log.info(&format!("Copying {destination}"));
            if let ResourceChange::Skipped { .. } = deploy_spec(ctx, spec)? {
                kept.push(destination);
            }
        }

        if kept.is_empty() {
            Ok(TaskResult::Ok)
        } else {
            Ok(TaskResult::Skipped(format!("kept existing {}", kept.join(", "))))
        }
    }
}
