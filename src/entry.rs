use clap::Parser;
use tracing::{error, info, warn};

use crate::args::{ConcurrencyMode, RunnerArgs, TestOptions};
use crate::error::{AppError, AppResult, ValidationError};
use crate::runner::{Orchestrator, RunOutcome};
use crate::workload::{WorkloadEntry, workload_registry};

pub(crate) fn run() -> AppResult<()> {
    let args = RunnerArgs::parse();
    crate::logger::init_logging(args.verbose);

    let options = TestOptions::new(&args)?;
    let entry = resolve_workload(&options.test)?;

    log_options(&options)?;

    let runtime = build_runtime(&options)?;
    let factory = entry.factory;
    runtime.block_on(async move {
        let orchestrator = Orchestrator::new(options, factory)?;
        if orchestrator.run().await? == RunOutcome::CompletedWithErrors {
            warn!("Run completed with errors; see the log above.");
        }
        Ok(())
    })
}

/// Looks up the requested workload, logging every valid name on a miss
/// so the failure is actionable without re-running with --help.
fn resolve_workload(name: &str) -> AppResult<&'static WorkloadEntry> {
    let registry = workload_registry();
    match registry.resolve(name) {
        Ok(entry) => Ok(entry),
        Err(err) => {
            error!(
                "Invalid test: {}. Available tests: {}",
                name,
                registry.names_csv()
            );
            Err(err)
        }
    }
}

fn log_options(options: &TestOptions) -> AppResult<()> {
    info!("");
    info!("=== Options ===");
    info!("{}", serde_json::to_string_pretty(options)?);
    info!("");
    Ok(())
}

/// Thread-parallel runs get a multi-thread runtime whose blocking pool
/// is sized to the worker count; cooperative runs share one thread.
fn build_runtime(options: &TestOptions) -> AppResult<tokio::runtime::Runtime> {
    let mut builder = match options.mode {
        ConcurrencyMode::Threaded => {
            let mut builder = tokio::runtime::Builder::new_multi_thread();
            builder.max_blocking_threads(options.parallel);
            builder
        }
        ConcurrencyMode::Cooperative => tokio::runtime::Builder::new_current_thread(),
    };
    builder
        .enable_all()
        .build()
        .map_err(|source| AppError::validation(ValidationError::RuntimeBuildFailed { source }))
}
