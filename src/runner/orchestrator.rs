use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{info, warn};

use super::phase::PhaseExecutor;
use super::worker::WorkerInstance;
use crate::args::TestOptions;
use crate::error::{AppError, AppResult, ValidationError};
use crate::workload::PerfTest;

/// Terminal state of a run. Both states mean every instance was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All phases ran without a hook or run-loop failure.
    Completed,
    /// One or more hook failures were logged; teardown still ran fully.
    CompletedWithErrors,
}

/// Sequences the full run lifecycle over a fixed set of worker
/// instances: global setup, per-instance setup, warmup, measured
/// iterations, and a teardown chain that is attempted on every path.
pub struct Orchestrator {
    options: TestOptions,
    workers: Vec<Arc<WorkerInstance>>,
}

impl Orchestrator {
    /// Constructs one worker instance per parallel slot.
    ///
    /// # Errors
    ///
    /// Fails when the workload factory rejects the run configuration, or
    /// when parallelism is zero (which validated options never produce).
    pub fn new<F>(options: TestOptions, factory: F) -> AppResult<Self>
    where
        F: Fn(&TestOptions) -> AppResult<Arc<dyn PerfTest>>,
    {
        if options.parallel == 0 {
            return Err(AppError::validation(ValidationError::ParallelZero));
        }
        let mut workers = Vec::with_capacity(options.parallel);
        for id in 0..options.parallel {
            let test = factory(&options)?;
            workers.push(Arc::new(WorkerInstance::new(id, test)));
        }
        Ok(Self { options, workers })
    }

    #[must_use]
    pub fn workers(&self) -> &[Arc<WorkerInstance>] {
        &self.workers
    }

    /// Runs the whole lifecycle. Hook and run-loop failures are logged
    /// and converted into `CompletedWithErrors`; they never abort the
    /// teardown chain, and `close` runs exactly once per instance on
    /// every path.
    ///
    /// # Errors
    ///
    /// Only infrastructure failures (none today) would surface here; all
    /// workload failures are absorbed into the outcome.
    pub async fn run(&self) -> AppResult<RunOutcome> {
        info!("=== Setup ===");

        let mut failed = false;

        if let Err(err) = self.setup_and_run().await {
            warn!("Exception: {}", err);
            failed = true;
        }

        info!("=== Pre Cleanup ===");
        if let Err(err) = try_join_all(self.workers.iter().map(|w| w.test().pre_cleanup())).await {
            warn!("Exception: {}", err);
            failed = true;
        }
        info!("");

        if !self.options.no_cleanup {
            info!("=== Cleanup ===");
            if let Err(err) = try_join_all(self.workers.iter().map(|w| w.test().cleanup())).await {
                warn!("Exception: {}", err);
                failed = true;
            }
        }

        // Isolated so a global teardown failure cannot suppress close().
        if let Some(representative) = self.workers.first() {
            if let Err(err) = representative.test().global_cleanup().await {
                warn!("Exception: {}", err);
                failed = true;
            }
        }

        for worker in &self.workers {
            if let Err(err) = worker.test().close().await {
                warn!("Failed to close instance {}: {}", worker.id(), err);
                failed = true;
            }
        }

        Ok(if failed {
            RunOutcome::CompletedWithErrors
        } else {
            RunOutcome::Completed
        })
    }

    /// Steps 2-6: setup hooks, warmup, and the measured iterations. Any
    /// error here returns early; the caller still drives the teardown
    /// chain.
    async fn setup_and_run(&self) -> AppResult<()> {
        let representative = self
            .workers
            .first()
            .ok_or_else(|| AppError::validation(ValidationError::ParallelZero))?;
        representative.test().global_setup().await?;

        try_join_all(self.workers.iter().map(|w| w.test().setup())).await?;

        info!("");
        info!("=== Post Setup ===");
        try_join_all(self.workers.iter().map(|w| w.test().post_setup())).await?;
        info!("");

        let executor = PhaseExecutor::new(&self.workers, self.options.mode);

        if self.options.warmup > 0 && !self.options.profile {
            executor
                .run("Warmup", self.options.warmup_duration())
                .await?;
        }

        for iteration in 0..self.options.iterations {
            let title = if self.options.iterations == 1 {
                "Test".to_owned()
            } else {
                format!("Test {}", iteration + 1)
            };
            executor.run(&title, self.options.phase_duration()).await?;
        }

        Ok(())
    }
}
