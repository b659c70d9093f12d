//! Core run machinery: worker instances, the recurring status timer,
//! bounded-duration phase execution, throughput aggregation, and the
//! orchestrator driving the full lifecycle.
//!
//! One quirk is preserved deliberately: operation counters accumulate
//! across warmup and every measured iteration. Each phase's printed
//! aggregate therefore reflects cumulative totals, not per-iteration
//! throughput. This matches the documented counter model.

mod aggregate;
mod orchestrator;
mod phase;
mod timer;
mod worker;


pub use aggregate::{PhaseStats, operations_per_second, total_operations};
pub use orchestrator::{Orchestrator, RunOutcome};
pub use phase::PhaseExecutor;
pub use timer::StatusTimer;
pub use worker::WorkerInstance;
