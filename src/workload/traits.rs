use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, AppResult, ValidationError};

/// Lifecycle contract implemented by every runnable workload.
///
/// Hook ordering for one run: `global_setup` (one representative instance)
/// → `setup` (all instances, concurrent) → `post_setup` (all instances) →
/// run phases → `pre_cleanup` → `cleanup` (unless disabled) →
/// `global_cleanup` (one instance) → `close` (all instances, always).
///
/// All hooks default to no-ops so workloads only implement what they need.
/// Hook errors propagate to the orchestrator; they never corrupt the
/// counters of other workers.
#[async_trait]
pub trait PerfTest: Send + Sync {
    /// Display name used in logs.
    fn name(&self) -> &str;

    /// One-time setup shared across all instances, e.g. provisioning a
    /// remote resource. Invoked on exactly one representative instance.
    ///
    /// # Errors
    ///
    /// A failure here skips every later setup and run step; teardown
    /// still runs. The default implementation never fails.
    async fn global_setup(&self) -> AppResult<()> {
        Ok(())
    }

    /// Per-instance setup, run concurrently across all instances.
    ///
    /// # Errors
    ///
    /// A failure skips the run phases; teardown still runs. The default
    /// implementation never fails.
    async fn setup(&self) -> AppResult<()> {
        Ok(())
    }

    /// Per-instance hook that runs after every `setup` has completed.
    ///
    /// # Errors
    ///
    /// Treated like a `setup` failure. The default implementation never
    /// fails.
    async fn post_setup(&self) -> AppResult<()> {
        Ok(())
    }

    /// Executes one or more operations and returns how many completed.
    ///
    /// `budget` is the wall-clock time remaining in the current phase; the
    /// bound is soft and an in-flight operation is never cancelled.
    ///
    /// # Errors
    ///
    /// Returns the workload's own operation failure, which aborts the
    /// current phase and triggers the cleanup chain.
    async fn run_batch(&self, budget: Duration) -> AppResult<u64>;

    /// Blocking counterpart of `run_batch`, used in sync mode.
    ///
    /// # Errors
    ///
    /// The default implementation rejects sync mode for workloads that do
    /// not opt in.
    fn run_batch_sync(&self, budget: Duration) -> AppResult<u64> {
        let _ = budget;
        Err(AppError::validation(ValidationError::SyncUnsupported {
            test: self.name().to_owned(),
        }))
    }

    /// Per-instance teardown that always runs, even after failures.
    ///
    /// # Errors
    ///
    /// Logged without stopping the rest of the teardown chain. The
    /// default implementation never fails.
    async fn pre_cleanup(&self) -> AppResult<()> {
        Ok(())
    }

    /// Per-instance teardown, skipped when cleanup is disabled.
    ///
    /// # Errors
    ///
    /// Logged without stopping the rest of the teardown chain. The
    /// default implementation never fails.
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }

    /// One-time teardown mirroring `global_setup`. Always attempted; its
    /// failure never suppresses `close`.
    ///
    /// # Errors
    ///
    /// Logged; `close` still runs on every instance. The default
    /// implementation never fails.
    async fn global_cleanup(&self) -> AppResult<()> {
        Ok(())
    }

    /// Releases local resources (network handles etc.). Called exactly
    /// once per instance, regardless of any prior failure.
    ///
    /// # Errors
    ///
    /// Logged per instance; other instances are still closed. The
    /// default implementation never fails.
    async fn close(&self) -> AppResult<()> {
        Ok(())
    }
}
