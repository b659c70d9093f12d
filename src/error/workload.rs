use thiserror::Error;

/// Failures surfaced by workload lifecycle hooks.
///
/// Workload implementations use these variants to report their own setup,
/// operation, and teardown failures; the orchestrator logs them and keeps
/// driving the teardown chain.
#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("Invalid workload option '{option}': {message}")]
    InvalidOption { option: String, message: String },
    #[error("Workload setup failed: {message}")]
    Setup { message: String },
    #[error("Workload operation failed: {message}")]
    Operation { message: String },
    #[error("Workload cleanup failed: {message}")]
    Cleanup { message: String },
}
