use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unknown test: '{name}'. Test must be one of: {available}")]
    UnknownTest { name: String, available: String },
    #[error("Parallelism must be >= 1.")]
    ParallelZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Test proxy list must not be empty.")]
    EmptyProxyList,
    #[error("Test proxy URI must not be empty.")]
    EmptyProxyUri,
    #[error("Test '{test}' does not support sync mode.")]
    SyncUnsupported { test: String },
    #[error("Failed to build runtime: {source}")]
    RuntimeBuildFailed {
        #[source]
        source: std::io::Error,
    },
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
