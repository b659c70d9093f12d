//! Workload plugin contract and registry.
//!
//! A workload is an opaque unit of work implementing [`PerfTest`]. The
//! orchestrator drives its lifecycle hooks polymorphically; only
//! [`PerfTest::run_batch`] (and [`PerfTest::run_batch_sync`] for sync
//! mode) contribute to throughput counters.

mod builtins;
mod registry;
mod traits;


#[cfg(test)]
pub(crate) mod test_stub;

pub use registry::{WorkloadEntry, WorkloadFactory, WorkloadRegistry, workload_registry};
pub use traits::PerfTest;
