use std::fmt::Display;

use anyhow::{anyhow, Result};

/// Collects the outcome of several checks
///
/// Errors are kept by their `Display` text because the combined result is
/// reported to the test log, where the `Debug` form of a `ValidationError`
/// or an I/O error hides the offending path in nested fields.
pub struct TestResult(Result<()>);

impl Default for TestResult {
    fn default() -> Self {
        TestResult(Ok(()))
    }
}

impl From<TestResult> for Result<()> {
    fn from(result: TestResult) -> Self {
        result.0
    }
}

impl TestResult {
    /// Applies the AND operation to the given results
    ///
    /// The first error is kept; errors of later results are ignored.
    pub fn combine<T, E>(&mut self, other_result: &Result<T, E>)
    where
        E: Display,
    {
        if self.0.is_ok() {
            if let Err(error) = other_result {
                self.0 = Err(anyhow!("{}", error))
            }
        }
    }
}
