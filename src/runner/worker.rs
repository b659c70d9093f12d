use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::error::AppResult;
use crate::workload::PerfTest;

/// One parallel slot: a workload instance plus its throughput counters.
///
/// Counters are written only by this instance's run-loop; the status
/// timer and the aggregator read them concurrently. Readers get
/// eventually-consistent snapshots, which is sufficient because only sums
/// and deltas are reported.
pub struct WorkerInstance {
    id: usize,
    test: Arc<dyn PerfTest>,
    completed_operations: AtomicU64,
    /// f64 seconds stored as a bit pattern so reads need no lock.
    last_completion_bits: AtomicU64,
}

impl WorkerInstance {
    #[must_use]
    pub fn new(id: usize, test: Arc<dyn PerfTest>) -> Self {
        Self {
            id,
            test,
            completed_operations: AtomicU64::new(0),
            last_completion_bits: AtomicU64::new(0.0_f64.to_bits()),
        }
    }

    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn test(&self) -> &dyn PerfTest {
        self.test.as_ref()
    }

    /// Monotonic count of operations completed so far in this run.
    #[must_use]
    pub fn completed_operations(&self) -> u64 {
        self.completed_operations.load(Ordering::Relaxed)
    }

    /// Wall-clock seconds this worker spent in its most recent phase.
    #[must_use]
    pub fn last_completion_time(&self) -> f64 {
        f64::from_bits(self.last_completion_bits.load(Ordering::Relaxed))
    }

    #[cfg(test)]
    pub(crate) fn set_counters(&self, operations: u64, seconds: f64) {
        self.completed_operations
            .store(operations, Ordering::Relaxed);
        self.last_completion_bits
            .store(seconds.to_bits(), Ordering::Relaxed);
    }

    fn record(&self, count: u64, elapsed: Duration) {
        self.completed_operations.fetch_add(count, Ordering::Relaxed);
        self.last_completion_bits
            .store(elapsed.as_secs_f64().to_bits(), Ordering::Relaxed);
    }

    /// Cooperative run-loop: invokes the workload's run step until the
    /// phase duration elapses. The duration bound is soft; the last
    /// in-flight operation always completes.
    ///
    /// # Errors
    ///
    /// Propagates the first workload operation failure. Counters recorded
    /// before the failure are preserved.
    pub async fn run_phase(&self, duration: Duration) -> AppResult<()> {
        let start = Instant::now();
        loop {
            let elapsed = start.elapsed();
            if elapsed >= duration {
                break;
            }
            let budget = duration.saturating_sub(elapsed);
            let count = self.test.run_batch(budget).await?;
            self.record(count, start.elapsed());
        }
        Ok(())
    }

    /// Blocking run-loop counterpart, executed on its own thread in
    /// thread-parallel mode.
    ///
    /// # Errors
    ///
    /// Propagates the first workload operation failure, including
    /// `SyncUnsupported` for workloads without a sync run step.
    pub fn run_phase_blocking(&self, duration: Duration) -> AppResult<()> {
        let start = Instant::now();
        loop {
            let elapsed = start.elapsed();
            if elapsed >= duration {
                break;
            }
            let budget = duration.saturating_sub(elapsed);
            let count = self.test.run_batch_sync(budget)?;
            self.record(count, start.elapsed());
        }
        Ok(())
    }
}
