mod app;
mod validation;
mod workload;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use validation::ValidationError;
pub use workload::WorkloadError;
