//! The provisioning run behind the binary.
use std::sync::Arc;

use anyhow::Result;

use crate::cli::Cli;
use crate::exec::SystemExecutor;
use crate::logging::{Log, Logger};
use crate::prompt::StdinConfirm;
use crate::resources::asset::EmbeddedAssets;
use crate::tasks::{self, Context, ProvisioningContext};

/// Name of this command, used for the log file.
pub const COMMAND: &str = "init";

/// Run the init command against the real system.
///
/// # Errors
///
/// Returns an error if the working directory cannot be resolved or any
/// stage fails.
pub fn run(cli: &Cli, log: &Arc<Logger>) -> Result<()> {
    log.info(&format!("Starting platform-starter {}", crate::VERSION));

    let provisioning = ProvisioningContext::resolve(&cli.dir, cli.npm)?;
    log.debug(&format!(
        "project root: {}, target directory: {}",
        provisioning.project_root.display(),
        provisioning.target_dir.display()
    ));
    if provisioning.use_fallback_package_manager {
        log.debug("fallback package manager forced");
    }

    let ctx = Context::new(
        provisioning,
        Arc::clone(log) as Arc<dyn Log>,
        Arc::new(SystemExecutor::new()),
        Arc::new(EmbeddedAssets),
        Arc::new(StdinConfirm),
    );
    provision(&ctx, log)
}

/// Run every stage in order and print the summary.
///
/// The summary is printed whether or not a stage failed.
///
/// # Errors
///
/// Returns the error of the first failing stage.
pub fn provision(ctx: &Context, log: &Logger) -> Result<()> {
    let result = tasks::run_all(&tasks::all_tasks(), ctx);
    if result.is_ok() {
        log.info("Everything ready!");
    }
    log.print_summary();
    result
}
