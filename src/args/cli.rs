use clap::Parser;

use super::parsers::{parse_positive_u32, parse_positive_usize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Performance-test orchestration engine - runs pluggable workloads under controlled parallelism with live throughput reporting."
)]
pub struct RunnerArgs {
    /// Name of the registered test to run
    pub test: String,

    /// Degree of parallelism to run with
    #[arg(long, short = 'p', default_value_t = 1, value_parser = parse_positive_usize)]
    pub parallel: usize,

    /// Duration of the test in seconds
    #[arg(long, short = 'd', default_value_t = 10)]
    pub duration: u64,

    /// Number of iterations in the main test loop
    #[arg(long, short = 'i', default_value_t = 1, value_parser = parse_positive_u32)]
    pub iterations: u32,

    /// Duration of warmup in seconds
    #[arg(long, short = 'w', default_value_t = 5)]
    pub warmup: u64,

    /// Do not run cleanup logic
    #[arg(long = "no-cleanup")]
    pub no_cleanup: bool,

    /// Run tests in sync (thread-parallel) mode
    #[arg(long)]
    pub sync: bool,

    /// Run tests with profiler (skips warmup)
    #[arg(long)]
    pub profile: bool,

    /// URIs of test proxy servers, separated by ';'
    #[arg(long = "test-proxies", short = 'x')]
    pub test_proxies: Option<String>,

    /// Disable SSL validation
    #[arg(long)]
    pub insecure: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Workload-specific options, passed after `--`
    #[arg(last = true)]
    pub test_args: Vec<String>,
}
