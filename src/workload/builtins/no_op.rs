use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::args::TestOptions;
use crate::error::AppResult;
use crate::workload::PerfTest;

/// Counter-churn workload: every operation completes immediately.
/// Useful for measuring the orchestration overhead itself.
pub(crate) struct NoOpTest;

pub(super) fn create(_options: &TestOptions) -> AppResult<Arc<dyn PerfTest>> {
    Ok(Arc::new(NoOpTest))
}

#[async_trait]
impl PerfTest for NoOpTest {
    fn name(&self) -> &str {
        "NoOpTest"
    }

    async fn run_batch(&self, _budget: Duration) -> AppResult<u64> {
        // Yield so sibling workers interleave under cooperative scheduling.
        tokio::task::yield_now().await;
        Ok(1)
    }

    fn run_batch_sync(&self, _budget: Duration) -> AppResult<u64> {
        Ok(1)
    }
}
