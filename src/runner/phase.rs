use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::info;

use super::aggregate::{self, PhaseStats};
use super::timer::StatusTimer;
use super::worker::WorkerInstance;
use crate::args::ConcurrencyMode;
use crate::error::{AppError, AppResult};

const STATUS_INTERVAL: Duration = Duration::from_secs(1);

/// Runs all workers concurrently for one bounded-duration phase (warmup
/// or a measured iteration) and reports live and final statistics.
pub struct PhaseExecutor {
    workers: Vec<Arc<WorkerInstance>>,
    mode: ConcurrencyMode,
}

/// Per-phase live status state. Owned by one phase execution and dropped
/// with it, so the tick baseline can never leak across phases.
struct StatusTracker {
    workers: Vec<Arc<WorkerInstance>>,
    title: String,
    previous_total: u64,
    header_printed: bool,
}

impl StatusTracker {
    fn new(workers: Vec<Arc<WorkerInstance>>, title: &str) -> Self {
        Self {
            workers,
            title: title.to_owned(),
            previous_total: 0,
            header_printed: false,
        }
    }

    fn tick(&mut self) {
        if !self.header_printed {
            self.header_printed = true;
            info!("=== {} ===", self.title);
            info!("Current\t\tTotal\t\tAverage");
        }

        let total = aggregate::total_operations(&self.workers);
        let current = total.saturating_sub(self.previous_total);
        let average = aggregate::operations_per_second(&self.workers);
        self.previous_total = total;

        info!("{}\t\t{}\t\t{:.2}", current, total, average);
    }
}

impl PhaseExecutor {
    #[must_use]
    pub fn new(workers: &[Arc<WorkerInstance>], mode: ConcurrencyMode) -> Self {
        Self {
            workers: workers.to_vec(),
            mode,
        }
    }

    /// Runs one phase: starts the status timer, drives every worker's
    /// run-loop to completion under the configured concurrency mode,
    /// stops the timer on every exit path, then logs the aggregate.
    ///
    /// # Errors
    ///
    /// Surfaces the first worker run-loop failure once all workers have
    /// reached a joinable state. The timer is stopped and worker counters
    /// keep whatever they recorded before the failure.
    pub async fn run(&self, title: &str, duration: Duration) -> AppResult<PhaseStats> {
        let mut tracker = StatusTracker::new(self.workers.clone(), title);
        let mut timer = StatusTimer::start(STATUS_INTERVAL, move || tracker.tick());

        let result = match self.mode {
            ConcurrencyMode::Threaded => self.run_threaded(duration).await,
            ConcurrencyMode::Cooperative => self.run_cooperative(duration).await,
        };

        timer.stop();
        result?;

        let stats = PhaseStats::collect(&self.workers);
        aggregate::log_results(stats);
        Ok(stats)
    }

    /// Thread-parallel fan-out: one blocking thread per worker. Blocking
    /// run-loops cannot be cancelled, so every thread is joined before
    /// the first error surfaces.
    async fn run_threaded(&self, duration: Duration) -> AppResult<()> {
        let mut tasks: JoinSet<AppResult<()>> = JoinSet::new();
        for worker in &self.workers {
            let worker = Arc::clone(worker);
            tasks.spawn_blocking(move || worker.run_phase_blocking(duration));
        }

        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(AppError::from(err));
                    }
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Cooperative fan-out with fail-fast joining: on the first error the
    /// remaining tasks are cancelled at their next suspend point, then
    /// everything is drained before the error surfaces.
    async fn run_cooperative(&self, duration: Duration) -> AppResult<()> {
        let mut tasks: JoinSet<AppResult<()>> = JoinSet::new();
        for worker in &self.workers {
            let worker = Arc::clone(worker);
            tasks.spawn(async move { worker.run_phase(duration).await });
        }

        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                        tasks.abort_all();
                    }
                }
                Err(err) => {
                    if !err.is_cancelled() && first_error.is_none() {
                        first_error = Some(AppError::from(err));
                    }
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::workload::test_stub::StubTest;

    fn counter_workers(counts: &[(u64, f64)]) -> Vec<Arc<WorkerInstance>> {
        counts
            .iter()
            .enumerate()
            .map(|(id, &(operations, seconds))| {
                let worker = Arc::new(WorkerInstance::new(id, Arc::new(StubTest::default())));
                worker.set_counters(operations, seconds);
                worker
            })
            .collect()
    }

    #[test]
    fn status_tracker_prints_header_on_first_tick_only() -> AppResult<()> {
        let workers = counter_workers(&[(0, 0.0)]);
        let mut tracker = StatusTracker::new(workers, "Warmup");
        if tracker.header_printed {
            return Err(AppError::validation("Expected no header before first tick"));
        }
        tracker.tick();
        tracker.tick();
        if !tracker.header_printed {
            return Err(AppError::validation("Expected header after first tick"));
        }
        Ok(())
    }

    #[test]
    fn status_tracker_current_telescopes_to_total() -> AppResult<()> {
        let workers = counter_workers(&[(0, 0.0), (0, 0.0)]);
        let mut tracker = StatusTracker::new(workers.clone(), "Test");

        let mut deltas = Vec::new();
        for total in [10_u64, 24, 24, 40] {
            for worker in &workers {
                worker.set_counters(total / 2, 1.0);
            }
            let before = tracker.previous_total;
            tracker.tick();
            deltas.push(tracker.previous_total.saturating_sub(before));
        }

        let summed: u64 = deltas.iter().sum();
        if summed != aggregate::total_operations(&workers) {
            return Err(AppError::validation(format!(
                "Expected tick deltas to telescope to the total, got {}",
                summed
            )));
        }
        if tracker.previous_total != 40 {
            return Err(AppError::validation("Expected final baseline of 40"));
        }
        Ok(())
    }

    #[test]
    fn status_tracker_baseline_starts_at_zero_each_phase() -> AppResult<()> {
        // Counters carry over from earlier phases, the baseline does not.
        let workers = counter_workers(&[(120, 2.0)]);
        let tracker = StatusTracker::new(workers, "Test 2");
        if tracker.previous_total != 0 {
            return Err(AppError::validation("Expected fresh baseline per phase"));
        }
        Ok(())
    }
}
