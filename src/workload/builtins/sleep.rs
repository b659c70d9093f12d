use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clap::Parser;
use rand::Rng;

use crate::args::TestOptions;
use crate::error::{AppError, AppResult, WorkloadError};
use crate::workload::PerfTest;

/// Largest accepted `--seconds`: the 1.5x jitter extreme must stay
/// convertible to a `Duration`.
const MAX_SECONDS: f64 = u64::MAX as f64 / 1.5;

#[derive(Debug, Parser)]
#[clap(name = "SleepTest", no_binary_name = true)]
struct SleepOptions {
    /// Nominal sleep per operation in seconds; the actual sleep is
    /// jittered between 0.5x and 1.5x of this value
    #[arg(long, default_value_t = 1.0)]
    seconds: f64,
}

/// Sleeps a jittered interval per operation, simulating a remote call
/// whose latency varies per request.
pub(crate) struct SleepTest {
    seconds: f64,
}

pub(super) fn create(options: &TestOptions) -> AppResult<Arc<dyn PerfTest>> {
    let parsed = SleepOptions::try_parse_from(&options.test_args)?;
    if !parsed.seconds.is_finite() || parsed.seconds < 0.0 || parsed.seconds > MAX_SECONDS {
        return Err(AppError::workload(WorkloadError::InvalidOption {
            option: "--seconds".to_owned(),
            message: format!(
                "must be a non-negative number no greater than {:e}, got {}",
                MAX_SECONDS, parsed.seconds
            ),
        }));
    }
    Ok(Arc::new(SleepTest {
        seconds: parsed.seconds,
    }))
}

impl SleepTest {
    fn jittered(&self) -> Duration {
        let factor = rand::thread_rng().gen_range(0.5..1.5);
        Duration::from_secs_f64(self.seconds * factor)
    }
}

#[async_trait]
impl PerfTest for SleepTest {
    fn name(&self) -> &str {
        "SleepTest"
    }

    async fn run_batch(&self, _budget: Duration) -> AppResult<u64> {
        tokio::time::sleep(self.jittered()).await;
        Ok(1)
    }

    fn run_batch_sync(&self, _budget: Duration) -> AppResult<u64> {
        std::thread::sleep(self.jittered());
        Ok(1)
    }
}
