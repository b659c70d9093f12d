use super::{ValidationError, WorkloadError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for WorkloadError {
    fn from(message: &'static str) -> Self {
        WorkloadError::Operation {
            message: message.to_owned(),
        }
    }
}

impl From<String> for WorkloadError {
    fn from(message: String) -> Self {
        WorkloadError::Operation { message }
    }
}
