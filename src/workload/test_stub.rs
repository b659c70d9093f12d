//! Scriptable workload used by engine tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::PerfTest;
use crate::error::{AppError, AppResult};

/// Shared observation state, cloned into every instance of one run so
/// tests can count hook invocations across all parallel slots.
#[derive(Default)]
pub(crate) struct StubState {
    pub(crate) events: Mutex<Vec<String>>,
    pub(crate) global_setup_calls: AtomicUsize,
    pub(crate) setup_calls: AtomicUsize,
    pub(crate) post_setup_calls: AtomicUsize,
    pub(crate) pre_cleanup_calls: AtomicUsize,
    pub(crate) cleanup_calls: AtomicUsize,
    pub(crate) global_cleanup_calls: AtomicUsize,
    pub(crate) close_calls: AtomicUsize,
    pub(crate) async_batches: AtomicUsize,
    pub(crate) sync_batches: AtomicUsize,
}

impl StubState {
    pub(crate) fn record(&self, event: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.to_owned());
        }
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

/// Workload whose hooks and run step are scripted per test.
pub(crate) struct StubTest {
    pub(crate) state: Arc<StubState>,
    pub(crate) fail_global_setup: bool,
    pub(crate) fail_setup: bool,
    pub(crate) fail_run: bool,
    pub(crate) fail_global_cleanup: bool,
    /// Operations reported by the first run call; later calls sleep out
    /// their budget and report zero when `single_batch` is set.
    pub(crate) batch_ops: u64,
    pub(crate) single_batch: bool,
    /// Pause per run call, keeping test run-loops from spinning hot.
    pub(crate) batch_delay: Duration,
    batch_fired: AtomicBool,
}

impl Default for StubTest {
    fn default() -> Self {
        Self {
            state: Arc::new(StubState::default()),
            fail_global_setup: false,
            fail_setup: false,
            fail_run: false,
            fail_global_cleanup: false,
            batch_ops: 1,
            single_batch: false,
            batch_delay: Duration::from_millis(2),
            batch_fired: AtomicBool::new(false),
        }
    }
}

impl StubTest {
    pub(crate) fn with_state(state: Arc<StubState>) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    fn next_batch(&self, budget: Duration) -> AppResult<(u64, Duration)> {
        if self.fail_run {
            return Err(AppError::workload("scripted run failure"));
        }
        if self.single_batch && self.batch_fired.swap(true, Ordering::Relaxed) {
            // Wait out the rest of the phase without completing anything.
            return Ok((0, budget));
        }
        Ok((self.batch_ops, self.batch_delay))
    }
}

#[async_trait]
impl PerfTest for StubTest {
    fn name(&self) -> &str {
        "StubTest"
    }

    async fn global_setup(&self) -> AppResult<()> {
        self.state.global_setup_calls.fetch_add(1, Ordering::SeqCst);
        self.state.record("global_setup");
        if self.fail_global_setup {
            return Err(AppError::workload("scripted global setup failure"));
        }
        Ok(())
    }

    async fn setup(&self) -> AppResult<()> {
        self.state.setup_calls.fetch_add(1, Ordering::SeqCst);
        self.state.record("setup");
        if self.fail_setup {
            return Err(AppError::workload("scripted setup failure"));
        }
        Ok(())
    }

    async fn post_setup(&self) -> AppResult<()> {
        self.state.post_setup_calls.fetch_add(1, Ordering::SeqCst);
        self.state.record("post_setup");
        Ok(())
    }

    async fn run_batch(&self, budget: Duration) -> AppResult<u64> {
        self.state.async_batches.fetch_add(1, Ordering::SeqCst);
        let (ops, delay) = self.next_batch(budget)?;
        tokio::time::sleep(delay).await;
        Ok(ops)
    }

    fn run_batch_sync(&self, budget: Duration) -> AppResult<u64> {
        self.state.sync_batches.fetch_add(1, Ordering::SeqCst);
        let (ops, delay) = self.next_batch(budget)?;
        std::thread::sleep(delay);
        Ok(ops)
    }

    async fn pre_cleanup(&self) -> AppResult<()> {
        self.state.pre_cleanup_calls.fetch_add(1, Ordering::SeqCst);
        self.state.record("pre_cleanup");
        Ok(())
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.state.cleanup_calls.fetch_add(1, Ordering::SeqCst);
        self.state.record("cleanup");
        Ok(())
    }

    async fn global_cleanup(&self) -> AppResult<()> {
        self.state
            .global_cleanup_calls
            .fetch_add(1, Ordering::SeqCst);
        self.state.record("global_cleanup");
        if self.fail_global_cleanup {
            return Err(AppError::workload("scripted global cleanup failure"));
        }
        Ok(())
    }

    async fn close(&self) -> AppResult<()> {
        self.state.close_calls.fetch_add(1, Ordering::SeqCst);
        self.state.record("close");
        Ok(())
    }
}
