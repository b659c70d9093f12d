use std::time::Duration;

use serde::Serialize;

use super::RunnerArgs;
use super::parsers::parse_proxy_list;
use crate::error::AppResult;

/// Concurrency model for worker run-loops, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcurrencyMode {
    /// One blocking thread per worker; safe for blocking workloads.
    Threaded,
    /// All workers interleave on one logical thread at await points.
    Cooperative,
}

/// Validated, immutable run configuration handed to workloads and the
/// orchestrator. Built once from [`RunnerArgs`] before anything executes.
#[derive(Debug, Clone, Serialize)]
pub struct TestOptions {
    pub test: String,
    pub parallel: usize,
    pub duration: u64,
    pub iterations: u32,
    pub warmup: u64,
    pub no_cleanup: bool,
    pub mode: ConcurrencyMode,
    pub profile: bool,
    pub test_proxies: Vec<String>,
    pub insecure: bool,
    /// Workload-specific options, opaque to the orchestrator.
    pub test_args: Vec<String>,
}

impl TestOptions {
    /// Validates and freezes the CLI arguments into run configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the proxy list is present but
    /// malformed. Parallelism and iteration bounds are enforced by the
    /// CLI value parsers before this runs.
    pub fn new(args: &RunnerArgs) -> AppResult<Self> {
        let test_proxies = match args.test_proxies.as_deref() {
            Some(raw) => parse_proxy_list(raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            test: args.test.clone(),
            parallel: args.parallel,
            duration: args.duration,
            iterations: args.iterations,
            warmup: args.warmup,
            no_cleanup: args.no_cleanup,
            mode: if args.sync {
                ConcurrencyMode::Threaded
            } else {
                ConcurrencyMode::Cooperative
            },
            profile: args.profile,
            insecure: args.insecure,
            test_args: args.test_args.clone(),
            test_proxies,
        })
    }

    #[must_use]
    pub const fn phase_duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    #[must_use]
    pub const fn warmup_duration(&self) -> Duration {
        Duration::from_secs(self.warmup)
    }
}
