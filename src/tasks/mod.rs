//! Named provisioning stages that orchestrate resource changes.
pub mod config_files;
mod context;
pub mod gitignore;
pub mod hooks;
pub mod repository;
pub mod requirements;

pub use context::{Context, ProvisioningContext};

use anyhow::Result;

use crate::logging::TaskStatus;
use crate::resources::ResourceChange;
use crate::resources::file::{FileResource, FileSpec};

/// Outcome of a stage that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Stage completed and everything it manages is in place.
    Ok,
    /// Stage completed but left something as it was.
    Skipped(String),
}

/// A named, executable stage.
pub trait Task {
    /// Human-readable stage name.
    fn name(&self) -> &str;

    /// Whether this stage has anything to do for the current project.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the stage fails, such as when an install command
    /// fails, a file cannot be written, or a git command fails.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Every stage of a provisioning run, in execution order.
#[must_use]
pub fn all_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(requirements::InstallRequirements),
        Box::new(gitignore::EnsureGitignore),
        Box::new(config_files::DeployConfigFiles),
        Box::new(repository::BootstrapRepository),
        Box::new(hooks::InstallPrecommitHook),
    ]
}

/// Execute a stage, recording the result in the logger.
///
/// # Errors
///
/// Returns the stage's error after recording it as failed.
pub fn execute(task: &dyn Task, ctx: &Context) -> Result<()> {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping stage: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return Ok(());
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
            Ok(())
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
            Ok(())
        }
        Err(e) => {
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
            Err(e.context(format!("{} failed", task.name())))
        }
    }
}

/// Execute stages in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the error of the first stage that fails; later stages do not run.
pub fn run_all(tasks: &[Box<dyn Task>], ctx: &Context) -> Result<()> {
    tasks.iter().try_for_each(|task| execute(task.as_ref(), ctx))
}

/// Deploy `spec` through the conflict-prompting path.
fn deploy_spec(ctx: &Context, spec: &FileSpec) -> Result<ResourceChange> {
    let asset = ctx.assets.fetch(spec.asset)?;
    let resource =
        FileResource::new(asset, ctx.path_for(spec)).creating_parents(spec.create_parents);
    Ok(resource.deploy(ctx.confirm.as_ref(), ctx.log.as_ref())?)
}
